use serde::{Deserialize, Serialize};

/// One line of source shown in a finding's context window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeLine {
    /// 1-based line number in the source file
    #[serde(rename = "line")]
    pub position: usize,
    #[serde(rename = "code")]
    pub line: String,
}

impl CodeLine {
    pub fn new(position: usize, line: impl Into<String>) -> Self {
        Self {
            position,
            line: line.into(),
        }
    }
}
