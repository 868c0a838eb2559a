use std::path::PathBuf;

use anyhow::Context;
use iac_line_locator::utils::{env, format_code_lines, init_logger, load_source_lines};
use iac_line_locator::DefaultLineDetector;
use serde_json::json;

// Minimal CLI helper to locate scan findings in a source file.
// Usage: cargo run --bin locate_lines -- [--text] <file> <search_key>...
// Prints one JSON object per search key, or numbered snippets with --text.
fn main() -> anyhow::Result<()> {
    // Load .env so IAC_LOCATOR_* settings are available
    env::load_env().ok();
    let config = env::load_config().context("invalid locator configuration")?;
    init_logger(config.log_level).context("failed to install logger")?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let text_output = match args.iter().position(|arg| arg == "--text") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };

    let mut args = args.into_iter();
    let Some(file) = args.next() else {
        anyhow::bail!("usage: locate_lines [--text] <file> <search_key>...");
    };
    let search_keys: Vec<String> = args.collect();
    if search_keys.is_empty() {
        anyhow::bail!("usage: locate_lines [--text] <file> <search_key>...");
    }

    let file_path = PathBuf::from(file);
    let lines = load_source_lines(&file_path)?;
    let detector = DefaultLineDetector::from_config(&config);

    for (search_key, result) in search_keys
        .iter()
        .zip(detector.detect_lines(&lines, &search_keys))
    {
        if text_output {
            match result.line {
                Some(line) => println!(
                    "{}:{} | {}\n{}\n",
                    file_path.display(),
                    line,
                    search_key,
                    format_code_lines(&result.vuln_lines, line)
                ),
                None => println!("{}:? | {} (not found)\n", file_path.display(), search_key),
            }
        } else {
            println!(
                "{}",
                json!({
                    "search_key": search_key,
                    "result": result,
                })
            );
        }
    }

    Ok(())
}
