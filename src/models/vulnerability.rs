use serde::{Deserialize, Serialize};

use super::CodeLine;

/// Where a finding was located in its source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VulnerabilityLines {
    /// 1-based line number, `None` when no part of the search key matched
    pub line: Option<usize>,
    /// Context window around `line`
    pub vuln_lines: Vec<CodeLine>,
    /// Trimmed text of the detected line
    pub line_with_vulnerability: String,
}

impl VulnerabilityLines {
    /// Result for a search key that matched nothing
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.line.is_some()
    }
}
