use std::io;

/// Errors raised while authoring or taking an exam.
#[derive(thiserror::Error, Debug)]
pub enum ExamError {
    #[error("expected {expected}, got '{input}'")]
    Parse { input: String, expected: &'static str },
    #[error("selection {selection} is outside 1..={count}")]
    OutOfRangeSelection { selection: usize, count: usize },
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
    #[error("input closed while waiting for a reply")]
    InputClosed,
    // Froms
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ExamError {
    /// Errors the console may answer with another prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExamError::Parse { .. } | ExamError::OutOfRangeSelection { .. }
        )
    }
}
