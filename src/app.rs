use std::io::{BufRead, Write};

use crate::authoring::author_exam;
use crate::config::Config;
use crate::console::Console;
use crate::error::ExamError;
use crate::models::{AppState, Exam};
use crate::session::{display_exam, SessionReport};
use crate::ui;

pub struct App<R, W> {
    pub state: AppState,
    config: Config,
    console: Console<R, W>,
    exam: Option<Exam>,
    reports: Vec<SessionReport>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        let console = Console::new(input, output)
            .with_attempts(config.attempts)
            .with_color(config.color);

        Self {
            state: AppState::Welcome,
            config,
            console,
            exam: None,
            reports: Vec::new(),
        }
    }

    pub fn exam(&self) -> Option<&Exam> {
        self.exam.as_ref()
    }

    pub fn reports(&self) -> &[SessionReport] {
        &self.reports
    }

    /// Drive the app until the operator declines to start or to retake.
    pub fn run(&mut self) -> Result<(), ExamError> {
        loop {
            match self.state {
                AppState::Welcome => {
                    if !self.console.confirm(ui::welcome::START_PROMPT)? {
                        tracing::info!("exam declined");
                        return Ok(());
                    }
                    self.state = AppState::Authoring;
                }
                AppState::Authoring => {
                    self.exam = Some(author_exam(&mut self.console, self.config.option_count)?);
                    self.state = AppState::Exam;
                }
                AppState::Exam => {
                    let Some(exam) = self.exam.as_ref() else {
                        self.state = AppState::Authoring;
                        continue;
                    };
                    let report = display_exam(exam, &mut self.console)?;
                    self.reports.push(report);
                    self.state = AppState::Result;
                }
                AppState::Result => {
                    if let Some(report) = self.reports.last() {
                        self.console.blank()?;
                        self.console.say(ui::result::render(report, self.console.color()))?;
                    }
                    if !self.console.confirm(ui::welcome::RETAKE_PROMPT)? {
                        return Ok(());
                    }
                    self.restart();
                }
            }
        }
    }

    /// Run the same exam again with a fresh score.
    pub fn restart(&mut self) {
        tracing::info!(previous_sessions = self.reports.len(), "retaking exam");
        self.state = AppState::Exam;
    }
}
