use std::num::NonZeroU32;

use super::{Question, QuestionKind};

/// Upper bound on the question slots reserved up front.
const MAX_PREALLOCATED: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Final,
    Practical,
}

impl ExamKind {
    /// Banner written before the session starts.
    pub fn banner(self) -> &'static str {
        match self {
            ExamKind::Final => "Final Exam",
            ExamKind::Practical => "Practical Exam",
        }
    }

    /// Practical exams are authored with multiple-choice questions only.
    pub fn offers_true_false(self) -> bool {
        matches!(self, ExamKind::Final)
    }
}

/// An ordered list of questions with an advisory duration.
#[derive(Debug, Clone)]
pub struct Exam {
    kind: ExamKind,
    duration: NonZeroU32,
    planned_questions: usize,
    questions: Vec<Question>,
}

impl Exam {
    pub fn new(kind: ExamKind, duration: NonZeroU32) -> Self {
        Self::with_capacity(kind, duration, 0)
    }

    /// Create an exam expecting `planned_questions` to be pushed.
    pub fn with_capacity(kind: ExamKind, duration: NonZeroU32, planned_questions: usize) -> Self {
        Self {
            kind,
            duration,
            planned_questions,
            questions: Vec::with_capacity(planned_questions.min(MAX_PREALLOCATED)),
        }
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    /// Duration in minutes. Never enforced.
    pub fn duration(&self) -> NonZeroU32 {
        self.duration
    }

    pub fn planned_questions(&self) -> usize {
        self.planned_questions
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn max_score(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.score())).sum()
    }

    pub fn count_of(&self, kind: QuestionKind) -> usize {
        self.questions.iter().filter(|q| q.kind() == kind).count()
    }
}
