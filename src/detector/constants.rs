//! Detector constants and precompiled patterns
//!
//! Patterns are compiled once per process and only ever read afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Indexed key form: `name[idx]` or `name[{{0}}]`
pub static INDEXED_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)\[([A-Za-z0-9_{}-]+)\]$").expect("indexed key pattern is valid")
});

/// A key fragment that is nothing but a positional placeholder reference: `{{3}}`
pub static PLACEHOLDER_REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\{([0-9]+)\}\}$").expect("placeholder reference pattern is valid"));

pub const OPEN_BRACKETS: &str = "{{";
pub const CLOSE_BRACKETS: &str = "}}";

/// Nested placeholders deeper than this are recorded but not descended into
pub const MAX_NESTING_DEPTH: usize = 32;

/// Separator between the parts of a search key
pub const KEY_PART_SEPARATOR: char = '.';

/// Context window size used when nothing else is configured
pub const DEFAULT_CONTEXT_LINES: usize = 3;
