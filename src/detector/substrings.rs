//! Search substrings derived from one part of a search key
//!
//! `name[idx]` and `name=value` parts search for the name and the value on
//! the same line; any other part searches for itself alone.

use super::constants::{INDEXED_KEY_PATTERN, PLACEHOLDER_REFERENCE_PATTERN};
use crate::error::DetectionIssue;
use crate::models::BracketValue;

/// Substrings searched for in the source lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySubstrings {
    /// Key or name fragment, must be present for a line to qualify
    pub substr1: String,
    /// Value fragment expected after `substr1` on the same line, may be empty
    pub substr2: String,
}

impl KeySubstrings {
    pub fn new(substr1: impl Into<String>, substr2: impl Into<String>) -> Self {
        Self {
            substr1: substr1.into(),
            substr2: substr2.into(),
        }
    }
}

/// Generates the substrings used for line searching depending on the key shape
///
/// `bracket_values` is the list `{{N}}` references in `key` point into.
pub fn generate_substrings(key: &str, bracket_values: &[BracketValue]) -> KeySubstrings {
    let (name, value) = split_key(key);

    let mut substr1 = resolve_fragment(name, bracket_values);
    let mut substr2 = resolve_fragment(value, bracket_values);

    if substr1.is_empty() {
        substr1 = std::mem::take(&mut substr2);
    }
    if substr1.is_empty() {
        // Nothing resolved, search for the key as written
        substr1 = [name, value]
            .into_iter()
            .find(|part| !part.is_empty())
            .unwrap_or_default()
            .to_string();
    }

    KeySubstrings { substr1, substr2 }
}

/// Splits a key part into its name and value fragments
fn split_key(key: &str) -> (&str, &str) {
    if let Some(caps) = INDEXED_KEY_PATTERN.captures(key) {
        if let (Some(name), Some(index)) = (caps.get(1), caps.get(2)) {
            return (name.as_str(), index.as_str());
        }
    }

    if key.matches('=').count() == 1 {
        if let Some((name, value)) = key.split_once('=') {
            return (name, value);
        }
    }

    (key, "")
}

/// Replaces a `{{N}}` fragment by the N-th bracket value
///
/// Other fragments are returned as written. An out-of-range reference
/// resolves to an empty string.
fn resolve_fragment(fragment: &str, bracket_values: &[BracketValue]) -> String {
    let Some(caps) = PLACEHOLDER_REFERENCE_PATTERN.captures(fragment) else {
        return fragment.to_string();
    };

    let resolved = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .and_then(|index| bracket_values.get(index));

    match resolved {
        Some(value) => value.inner.clone(),
        None => {
            log::warn!(
                "[substrings] {}",
                DetectionIssue::UnresolvedIndex {
                    reference: fragment.to_string(),
                    available: bracket_values.len(),
                }
            );
            String::new()
        }
    }
}
