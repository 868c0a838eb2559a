use serde::{Deserialize, Serialize};

/// A `{{...}}` placeholder discovered in a search key
///
/// `full` is the placeholder as written (braces included), `inner` is the
/// expression between the outermost braces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BracketValue {
    pub full: String,
    pub inner: String,
}

impl BracketValue {
    /// Wraps `inner` in braces to rebuild the placeholder text
    pub fn from_inner(inner: &str) -> Self {
        Self {
            full: format!("{{{{{}}}}}", inner),
            inner: inner.to_string(),
        }
    }
}
