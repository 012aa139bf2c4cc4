mod answer;
mod exam;
mod question;

pub use answer::Answer;
pub use exam::{Exam, ExamKind};
pub use question::{FALSE_ID, Question, QuestionKind, TRUE_ID};

/// Top-level state of the interactive app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Authoring,
    Exam,
    Result,
}
