use crate::models::Exam;

pub const START_PROMPT: &str = "Do you want to start the exam? (yes/no): ";
pub const RETAKE_PROMPT: &str = "Retake the exam? (yes/no): ";

/// Exam title followed by a one-line overview.
pub fn banner(exam: &Exam) -> String {
    format!(
        "{}\n{} · {} · {}",
        exam.kind().banner(),
        counted(u64::from(exam.duration().get()), "minute"),
        counted(exam.questions().len() as u64, "question"),
        counted(exam.max_score(), "point")
    )
}

fn counted(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::models::{ExamKind, Question};

    #[test]
    fn test_banner_names_variant() {
        let mut exam = Exam::new(ExamKind::Practical, NonZeroU32::new(45).unwrap());
        exam.push(Question::true_false("Sky is blue?", 5, 1).unwrap());

        let text = banner(&exam);
        assert_eq!(text.lines().next(), Some("Practical Exam"));
        assert!(text.ends_with("45 minutes · 1 question · 5 points"));
    }

    #[test]
    fn test_banner_singular_and_empty() {
        let mut exam = Exam::new(ExamKind::Final, NonZeroU32::new(1).unwrap());
        assert!(banner(&exam).ends_with("1 minute · 0 questions · 0 points"));

        exam.push(Question::true_false("Sky is blue?", 1, 1).unwrap());
        assert!(banner(&exam).ends_with("1 minute · 1 question · 1 point"));
    }
}
