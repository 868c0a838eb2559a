//! Line detection engine
//!
//! Maps a search key produced by a query back to the source line it refers to.

pub mod brackets;
pub mod constants;
pub mod default_detector;
pub mod distance;
pub mod fragment;
pub mod matcher;
pub mod substrings;

pub use brackets::{collect_bracket_values, get_bracket_values, sanitize_search_key};
pub use default_detector::DefaultLineDetector;
pub use distance::levenshtein_distance;
pub use fragment::{extract_key_fragment, extract_line_fragment};
pub use matcher::{detect_current_line, select_line_with_minimum_distance, LineMatch};
pub use substrings::{generate_substrings, KeySubstrings};
