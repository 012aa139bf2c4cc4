use std::fmt;

use crossterm::style::Color;

use crate::models::{Question, QuestionKind};

use super::paint;

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Points)", self.description(), self.score())?;
        match self.kind() {
            QuestionKind::TrueFalse => write!(f, "\n1) True\n2) False"),
            QuestionKind::MultipleChoice => {
                for (index, option) in self.options().iter().enumerate() {
                    write!(f, "\n{}) {}", index + 1, option.text())?;
                }
                Ok(())
            }
        }
    }
}

pub fn verdict(question: &Question, is_correct: bool, color: bool) -> String {
    if is_correct {
        paint("Correct!", Color::Green, color)
    } else {
        format!(
            "{} Correct answer: {}",
            paint("Wrong!", Color::Red, color),
            question.correct_answer().text()
        )
    }
}
