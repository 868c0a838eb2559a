// iac-line-locator - source line detection for IaC scan findings
// Module re-exports

pub mod detector;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use models::{BracketValue, CodeLine, VulnerabilityLines};

pub use detector::{DefaultLineDetector, LineMatch};
pub use error::{DetectionIssue, LocatorError};
pub use utils::{get_adjacent_vuln_lines, LocatorConfig};
