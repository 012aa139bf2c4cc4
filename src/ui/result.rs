use crossterm::style::Color;

use crate::session::SessionReport;

use super::paint;

const QUESTION_PREVIEW_LENGTH: usize = 55;

/// Per-question breakdown followed by the score as a share of the maximum.
pub fn render(report: &SessionReport, color: bool) -> String {
    let mut lines = Vec::with_capacity(report.outcomes().len() + 2);
    lines.push(String::from("RESULTS"));

    for (index, outcome) in report.outcomes().iter().enumerate() {
        let (symbol, symbol_color) = if outcome.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };
        lines.push(format!(
            " {} {:2}. {}",
            paint(symbol, symbol_color, color),
            index + 1,
            truncate_question(&outcome.description)
        ));
    }

    let percentage = report.percentage();
    let summary = format!(
        "{} / {}  ({:.0}%)",
        report.score(),
        report.max_score(),
        percentage
    );
    lines.push(paint(&summary, grade_color(percentage), color));
    lines.join("\n")
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::console::Console;
    use crate::models::{Exam, ExamKind, Question};
    use crate::session::run_session;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("Sky is blue?"), "Sky is blue?");
        let long = "x".repeat(60);
        let truncated = truncate_question(&long);
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color(100.0), Color::Green);
        assert_eq!(grade_color(75.0), Color::Cyan);
        assert_eq!(grade_color(50.0), Color::Yellow);
        assert_eq!(grade_color(0.0), Color::Red);
    }

    #[test]
    fn test_render_breakdown() {
        let mut exam = Exam::new(ExamKind::Final, NonZeroU32::new(5).unwrap());
        exam.push(Question::true_false("Sky is blue?", 5, 1).unwrap());
        exam.push(Question::true_false("Fire is cold?", 5, 2).unwrap());

        let mut console = Console::new("1\n1\n".as_bytes(), Vec::new());
        let report = run_session(&exam, &mut console).unwrap();

        assert_eq!(
            render(&report, false),
            "RESULTS\n +  1. Sky is blue?\n -  2. Fire is cold?\n5 / 10  (50%)"
        );
    }
}
