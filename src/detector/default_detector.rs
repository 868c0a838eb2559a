//! Default line detector
//!
//! Walks a search key part by part (`resource.aws_s3_bucket[{{b}}].acl`),
//! matching each part at or after the line matched by the previous part, so
//! the reported line is the deepest part that could still be found.

use std::path::Path;

use super::brackets::{get_bracket_values, sanitize_search_key};
use super::constants::{DEFAULT_CONTEXT_LINES, KEY_PART_SEPARATOR};
use super::matcher::detect_current_line;
use super::substrings::generate_substrings;
use crate::error::Result;
use crate::models::VulnerabilityLines;
use crate::utils::code_context::get_adjacent_vuln_lines;
use crate::utils::env::LocatorConfig;
use crate::utils::source::load_source_lines;

/// Locates findings in source lines by their search key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLineDetector {
    context_lines: usize,
}

impl Default for DefaultLineDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl DefaultLineDetector {
    /// Creates a detector reporting `context_lines` lines around each finding
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }

    pub fn from_config(config: &LocatorConfig) -> Self {
        Self::new(config.context_lines)
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// Detects the line of `search_key` in `lines`
    ///
    /// # Returns
    /// The 1-based line of the deepest key part that matched, with its context
    /// window. When not even the first part matches, `line` is `None`.
    pub fn detect_line<S: AsRef<str>>(&self, lines: &[S], search_key: &str) -> VulnerabilityLines {
        let bracket_values = get_bracket_values(search_key);
        let sanitized = sanitize_search_key(search_key, &bracket_values);

        let mut current_line = 0;
        let mut found_one = false;

        for part in sanitized.split(KEY_PART_SEPARATOR) {
            let substrings = generate_substrings(part, &bracket_values);
            let result = detect_current_line(
                lines,
                &substrings.substr1,
                &substrings.substr2,
                current_line,
                found_one,
            );

            found_one = result.found;
            current_line = result.line;
            if result.stop {
                break;
            }
        }

        if !found_one {
            log::warn!("[detector] Failed to detect line, search key {}", search_key);
            return VulnerabilityLines::not_found();
        }

        let line_with_vulnerability = lines
            .get(current_line)
            .map(|line| {
                let line: &str = line.as_ref();
                line.trim().to_string()
            })
            .unwrap_or_default();

        VulnerabilityLines {
            line: Some(current_line + 1),
            vuln_lines: get_adjacent_vuln_lines(current_line, self.context_lines, lines),
            line_with_vulnerability,
        }
    }

    /// Detects several search keys in the same file, results in key order
    pub fn detect_lines<S, K>(&self, lines: &[S], search_keys: &[K]) -> Vec<VulnerabilityLines>
    where
        S: AsRef<str>,
        K: AsRef<str>,
    {
        search_keys
            .iter()
            .map(|key| self.detect_line(lines, key.as_ref()))
            .collect()
    }

    /// Reads `path` and detects `search_key` in it
    ///
    /// # Errors
    /// Returns an error only if the file cannot be read
    pub fn detect_in_file(&self, path: &Path, search_key: &str) -> Result<VulnerabilityLines> {
        let lines = load_source_lines(path)?;
        Ok(self.detect_line(&lines, search_key))
    }
}
