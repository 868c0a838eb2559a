use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised at the edges of the locator (file I/O, configuration, logger setup)
///
/// Line detection itself never fails with one of these; see [`DetectionIssue`].
#[derive(Error, Debug)]
pub enum LocatorError {
    /// Source file could not be read
    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration value is present but unusable
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Log subscriber could not be installed
    #[error("Logger initialization failed: {0}")]
    LoggerInit(String),
}

/// Result type alias for locator operations
pub type Result<T> = std::result::Result<T, LocatorError>;

/// Non-fatal problems met while locating a finding
///
/// These are logged and the detection degrades to a best-effort line instead
/// of aborting the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionIssue {
    /// A `{{N}}` reference points past the discovered bracket values
    #[error("placeholder {reference} is out of range ({available} bracket values discovered)")]
    UnresolvedIndex { reference: String, available: usize },

    /// No remaining line satisfies the substring predicate
    #[error("no line matches '{substr1}' / '{substr2}' from line {cursor}")]
    NoMatchFound {
        substr1: String,
        substr2: String,
        cursor: usize,
    },

    /// Unbalanced or unterminated braces in a template expression
    #[error("malformed bracket expression: {0}")]
    MalformedBracketExpression(String),
}
