//! Interactive construction of an exam from operator replies.

use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use crate::console::Console;
use crate::error::ExamError;
use crate::models::{Answer, Exam, ExamKind, FALSE_ID, Question, QuestionKind, TRUE_ID};

const EXAM_KINDS: [ExamKind; 2] = [ExamKind::Final, ExamKind::Practical];
const QUESTION_KINDS: [QuestionKind; 2] = [QuestionKind::TrueFalse, QuestionKind::MultipleChoice];

/// Prompt for an exam and all of its questions.
///
/// Multiple-choice questions are authored with `option_count` options each.
pub fn author_exam<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    option_count: usize,
) -> Result<Exam, ExamError> {
    let kind = EXAM_KINDS[console.ask_selection(
        "Select Exam Type: 1) Final Exam  2) Practical Exam\n",
        EXAM_KINDS.len(),
    )? - 1];
    let duration: NonZeroU32 = console.ask_number(
        "Enter exam duration (minutes): ",
        "a positive number of minutes",
    )?;
    let count: usize =
        console.ask_number("Enter number of questions: ", "a number of questions")?;

    let mut exam = Exam::with_capacity(kind, duration, count);
    for index in 0..count {
        let question = author_question(console, kind, option_count)?;
        tracing::debug!(
            index,
            kind = ?question.kind(),
            score = question.score(),
            "question authored"
        );
        exam.push(question);
    }

    tracing::info!(
        kind = ?exam.kind(),
        true_false = exam.count_of(QuestionKind::TrueFalse),
        multiple_choice = exam.count_of(QuestionKind::MultipleChoice),
        "exam authored"
    );
    Ok(exam)
}

fn author_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    exam_kind: ExamKind,
    option_count: usize,
) -> Result<Question, ExamError> {
    let kind = if exam_kind.offers_true_false() {
        QUESTION_KINDS[console.ask_selection(
            "Select Question Type: 1) True/False  2) MCQ\n",
            QUESTION_KINDS.len(),
        )? - 1]
    } else {
        QuestionKind::MultipleChoice
    };

    let body = console.ask("Enter question body: ")?;
    let score: u32 = console.ask_number("Enter question score: ", "a non-negative score")?;

    match kind {
        QuestionKind::TrueFalse => {
            let selection = console.ask_selection(
                "Enter correct answer (1 for True, 2 for False): ",
                2,
            )?;
            let correct_id = if selection == 1 { TRUE_ID } else { FALSE_ID };
            Question::true_false(body, score, correct_id)
        }
        QuestionKind::MultipleChoice => {
            let mut options = Vec::with_capacity(option_count);
            for (id, position) in (1u32..).zip(1..=option_count) {
                let text = console.ask(&format!("Enter option {}: ", position))?;
                options.push(Answer::new(id, text));
            }
            let selection = console.ask_selection(
                &format!("Enter correct answer (1-{}): ", option_count),
                option_count,
            )?;
            let correct_id = options[selection - 1].id();
            Question::multiple_choice(body, score, options, correct_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_exam_with_both_kinds() {
        let script = "1\n10\n2\n\
                      1\nSky is blue?\n5\n1\n\
                      2\nCapital of France?\n10\nParis\nRome\nBerlin\n1\n";
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let exam = author_exam(&mut console, 3).unwrap();

        assert_eq!(exam.kind(), ExamKind::Final);
        assert_eq!(exam.duration().get(), 10);
        assert_eq!(exam.planned_questions(), 2);
        assert_eq!(exam.questions().len(), 2);

        let tf = &exam.questions()[0];
        assert_eq!(tf.kind(), QuestionKind::TrueFalse);
        assert_eq!(tf.correct_answer().text(), "True");

        let mcq = &exam.questions()[1];
        assert_eq!(mcq.kind(), QuestionKind::MultipleChoice);
        assert_eq!(mcq.options().len(), 3);
        assert_eq!(mcq.correct_answer().text(), "Paris");
        assert_eq!(mcq.score(), 10);
    }

    #[test]
    fn test_practical_exam_skips_type_prompt() {
        let script = "2\n30\n1\n2 + 2?\n4\nthree\nfour\n2\n";
        let mut output = Vec::new();
        let mut console = Console::new(script.as_bytes(), &mut output);
        let exam = author_exam(&mut console, 2).unwrap();

        assert_eq!(exam.kind(), ExamKind::Practical);
        let question = &exam.questions()[0];
        assert_eq!(question.kind(), QuestionKind::MultipleChoice);
        assert_eq!(question.correct_answer().text(), "four");

        let transcript = String::from_utf8(output).unwrap();
        assert!(!transcript.contains("Select Question Type"));
        assert!(transcript.contains("Enter correct answer (1-2): "));
    }

    #[test]
    fn test_true_false_false_is_correct() {
        let script = "1\n5\n1\n1\nFire is cold?\n2\n2\n";
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let exam = author_exam(&mut console, 3).unwrap();
        assert_eq!(exam.questions()[0].correct_answer().text(), "False");
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut console = Console::new("1\n0\n".as_bytes(), Vec::new());
        let err = author_exam(&mut console, 3).unwrap_err();
        assert!(matches!(err, ExamError::Parse { .. }));
    }

    #[test]
    fn test_correct_option_out_of_range() {
        let script = "2\n30\n1\nPick one\n1\na\nb\nc\n4\n";
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let err = author_exam(&mut console, 3).unwrap_err();
        assert!(matches!(
            err,
            ExamError::OutOfRangeSelection { selection: 4, count: 3 }
        ));
    }

    #[test]
    fn test_huge_question_count_waits_for_input() {
        let mut console = Console::new("1\n10\n18446744073709551615\n".as_bytes(), Vec::new());
        let err = author_exam(&mut console, 3).unwrap_err();
        assert!(matches!(err, ExamError::InputClosed));
    }

    #[test]
    fn test_truncated_script_reports_closed_input() {
        let mut console = Console::new("1\n10\n1\n1\n".as_bytes(), Vec::new());
        let err = author_exam(&mut console, 3).unwrap_err();
        assert!(matches!(err, ExamError::InputClosed));
    }
}
