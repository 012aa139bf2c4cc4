//! # exam-console
//!
//! A console exam utility: an operator authors true/false and
//! multiple-choice questions, then a timed session scores the answers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exam_console::{Config, ExamError};
//!
//! fn main() -> Result<(), ExamError> {
//!     // Author an exam on stdin/stdout, then take it
//!     exam_console::run(Config::default())
//! }
//! ```
//!
//! The pieces can also be driven directly over any reader and writer:
//!
//! ```rust
//! use std::num::NonZeroU32;
//! use exam_console::{run_session, Console, Exam, ExamKind, Question};
//!
//! let mut exam = Exam::new(ExamKind::Final, NonZeroU32::new(10).unwrap());
//! exam.push(Question::true_false("Sky is blue?", 5, 1).unwrap());
//!
//! let mut console = Console::new("1\n".as_bytes(), Vec::new());
//! let report = run_session(&exam, &mut console).unwrap();
//! assert_eq!(report.score(), 5);
//! ```

mod app;
mod authoring;
mod config;
mod console;
mod error;
mod models;
mod session;
mod ui;

use std::io;

pub use app::App;
pub use authoring::author_exam;
pub use config::{Config, DEFAULT_ATTEMPTS, DEFAULT_OPTION_COUNT};
pub use console::Console;
pub use error::ExamError;
pub use models::{Answer, AppState, Exam, ExamKind, Question, QuestionKind};
pub use session::{display_exam, run_session, QuestionOutcome, Session, SessionReport, SessionState};

/// Run the interactive app on stdin and stdout.
pub fn run(config: Config) -> Result<(), ExamError> {
    let mut app = App::new(io::stdin().lock(), io::stdout().lock(), config);
    app.run()
}
