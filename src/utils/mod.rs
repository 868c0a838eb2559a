//! Utility functions for the locator
//!
//! Provides context windows, source loading, configuration and logging.

pub mod code_context;
pub mod env;
pub mod logger;
pub mod source;

pub use code_context::{format_code_lines, get_adjacent_vuln_lines};
pub use env::{load_config, load_env, LocatorConfig};
pub use logger::init_logger;
pub use source::{load_source_lines, split_source_lines};
