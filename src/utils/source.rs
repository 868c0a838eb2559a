//! Source file loading
//!
//! Turns file content into the line array the detector works on.

use std::fs;
use std::path::Path;

use crate::error::{LocatorError, Result};

/// Read a file into lines
///
/// Invalid UTF-8 is replaced rather than rejected, so a finding in a file
/// with a stray Latin-1 byte can still be located.
///
/// # Errors
/// Returns error if the file cannot be read
pub fn load_source_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| LocatorError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_source_lines(&String::from_utf8_lossy(&bytes)))
}

/// Split content on `\n`, dropping the `\r` of CRLF line endings
///
/// A trailing newline yields a trailing empty line, keeping line numbers in
/// step with what editors show.
pub fn split_source_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
