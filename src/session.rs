//! Running an exam: prompting each question, scoring, timing.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::console::Console;
use crate::error::ExamError;
use crate::models::{Answer, Exam, Question};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    /// Waiting on the answer to the question at this index.
    InProgress(usize),
    Completed,
}

/// How a single question was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub description: String,
    pub chosen_id: u32,
    pub correct_id: u32,
    pub is_correct: bool,
    pub awarded: u32,
}

/// Final result of one session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    score: u64,
    max_score: u64,
    elapsed: Duration,
    outcomes: Vec<QuestionOutcome>,
}

impl SessionReport {
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    pub fn correct_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_correct).count()
    }

    pub fn percentage(&self) -> f64 {
        if self.max_score > 0 {
            (self.score as f64 / self.max_score as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Running total. Only this module can credit points, and only upwards.
#[derive(Debug, Default)]
struct Tally(u64);

impl Tally {
    fn credit(&mut self, points: u32) {
        self.0 = self.0.saturating_add(u64::from(points));
    }
}

/// One pass over an exam's questions.
pub struct Session<'a> {
    exam: &'a Exam,
    state: SessionState,
    tally: Tally,
    outcomes: Vec<QuestionOutcome>,
}

impl<'a> Session<'a> {
    pub fn new(exam: &'a Exam) -> Self {
        Self {
            exam,
            state: SessionState::NotStarted,
            tally: Tally::default(),
            outcomes: Vec::with_capacity(exam.questions().len()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Ask every question in order, then write the totals.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionReport, ExamError> {
        let exam = self.exam;
        tracing::info!(
            kind = ?exam.kind(),
            questions = exam.questions().len(),
            planned = exam.planned_questions(),
            duration_minutes = exam.duration().get(),
            "session started"
        );

        let started = Instant::now();
        for (index, question) in exam.questions().iter().enumerate() {
            self.state = SessionState::InProgress(index);

            console.say(question)?;
            let selection = console.ask_selection("Your answer: ", question.options().len())?;
            let chosen = question.resolve(selection)?;
            let outcome = self.record(question, chosen);

            console.say(ui::quiz::verdict(question, outcome.is_correct, console.color()))?;
            console.blank()?;
        }
        let elapsed = started.elapsed();
        self.state = SessionState::Completed;

        let report = SessionReport {
            score: self.tally.0,
            max_score: exam.max_score(),
            elapsed,
            outcomes: self.outcomes,
        };
        tracing::info!(
            score = report.score,
            max_score = report.max_score,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "session completed"
        );

        console.say(format!("Your total score: {}", report.score))?;
        console.say(format!(
            "Time taken: {:.3} seconds",
            report.elapsed.as_secs_f64()
        ))?;
        Ok(report)
    }

    fn record(&mut self, question: &Question, chosen: &Answer) -> QuestionOutcome {
        let is_correct = question.is_correct(chosen);
        let awarded = if is_correct { question.score() } else { 0 };
        self.tally.credit(awarded);

        tracing::debug!(
            state = ?self.state(),
            chosen = chosen.id(),
            correct = question.correct_answer().id(),
            awarded,
            "answer recorded"
        );

        let outcome = QuestionOutcome {
            description: question.description().to_string(),
            chosen_id: chosen.id(),
            correct_id: question.correct_answer().id(),
            is_correct,
            awarded,
        };
        self.outcomes.push(outcome.clone());
        outcome
    }
}

pub fn run_session<R: BufRead, W: Write>(
    exam: &Exam,
    console: &mut Console<R, W>,
) -> Result<SessionReport, ExamError> {
    Session::new(exam).run(console)
}

/// Write the exam banner, then run a session over it.
pub fn display_exam<R: BufRead, W: Write>(
    exam: &Exam,
    console: &mut Console<R, W>,
) -> Result<SessionReport, ExamError> {
    console.say(ui::welcome::banner(exam))?;
    run_session(exam, console)
}
