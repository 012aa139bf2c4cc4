use std::collections::HashSet;

use crate::error::ExamError;

use super::Answer;

pub const TRUE_ID: u32 = 1;
pub const FALSE_ID: u32 = 2;

/// Minimum number of options any question carries.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
}

/// A prompt with a point value and one correct answer among its options.
///
/// Questions are validated on construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Question {
    kind: QuestionKind,
    description: String,
    score: u32,
    options: Vec<Answer>,
    correct: Answer,
}

impl Question {
    /// Build a true/false question. `correct_id` must be 1 (True) or 2 (False).
    pub fn true_false(
        description: impl Into<String>,
        score: u32,
        correct_id: u32,
    ) -> Result<Self, ExamError> {
        let options = vec![Answer::new(TRUE_ID, "True"), Answer::new(FALSE_ID, "False")];
        Self::build(QuestionKind::TrueFalse, description.into(), score, options, correct_id)
    }

    /// Build a multiple-choice question over any number (>= 2) of options.
    pub fn multiple_choice(
        description: impl Into<String>,
        score: u32,
        options: Vec<Answer>,
        correct_id: u32,
    ) -> Result<Self, ExamError> {
        Self::build(
            QuestionKind::MultipleChoice,
            description.into(),
            score,
            options,
            correct_id,
        )
    }

    fn build(
        kind: QuestionKind,
        description: String,
        score: u32,
        options: Vec<Answer>,
        correct_id: u32,
    ) -> Result<Self, ExamError> {
        if options.len() < MIN_OPTIONS {
            return Err(ExamError::InvalidQuestion(format!(
                "'{}' needs at least {} options, got {}",
                description,
                MIN_OPTIONS,
                options.len()
            )));
        }

        let mut seen = HashSet::with_capacity(options.len());
        if let Some(dup) = options.iter().find(|a| !seen.insert(a.id())) {
            return Err(ExamError::InvalidQuestion(format!(
                "'{}' has duplicate option id {}",
                description,
                dup.id()
            )));
        }

        let correct = options
            .iter()
            .find(|a| a.id() == correct_id)
            .cloned()
            .ok_or_else(|| {
                ExamError::InvalidQuestion(format!(
                    "'{}' has no option with id {}",
                    description, correct_id
                ))
            })?;

        Ok(Self {
            kind,
            description,
            score,
            options,
            correct,
        })
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn options(&self) -> &[Answer] {
        &self.options
    }

    pub fn correct_answer(&self) -> &Answer {
        &self.correct
    }

    /// Map a 1-based selection onto the option list.
    pub fn resolve(&self, selection: usize) -> Result<&Answer, ExamError> {
        selection
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .ok_or(ExamError::OutOfRangeSelection {
                selection,
                count: self.options.len(),
            })
    }

    pub fn is_correct(&self, chosen: &Answer) -> bool {
        chosen.id() == self.correct.id()
    }
}
