// Locator data models

pub mod bracket;
pub mod code_line;
pub mod vulnerability;

// Re-exports for convenience
pub use bracket::BracketValue;
pub use code_line::CodeLine;
pub use vulnerability::VulnerabilityLines;
