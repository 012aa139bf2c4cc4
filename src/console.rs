//! Line-oriented prompts over any reader/writer pair.
//!
//! The console owns the input policy: a malformed or out-of-range reply is
//! prompted again until the attempt budget runs out, then the error is returned.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ExamError;

pub struct Console<R, W> {
    input: R,
    output: W,
    attempts: NonZeroU32,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// A console that gives up on the first bad reply and writes plain text.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            attempts: NonZeroU32::MIN,
            color: false,
        }
    }

    pub fn with_attempts(mut self, attempts: NonZeroU32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), ExamError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), ExamError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Write `label` without a newline and read the reply, minus its line ending.
    pub fn ask(&mut self, label: &str) -> Result<String, ExamError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ExamError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// `true` only for a case-insensitive "yes".
    pub fn confirm(&mut self, label: &str) -> Result<bool, ExamError> {
        let reply = self.ask(label)?;
        Ok(reply.trim().eq_ignore_ascii_case("yes"))
    }

    pub fn ask_number<T: FromStr>(
        &mut self,
        label: &str,
        expected: &'static str,
    ) -> Result<T, ExamError> {
        self.ask_until(label, |reply| parse_number(reply, expected))
    }

    /// Ask for a 1-based index into a list of `count` entries.
    pub fn ask_selection(&mut self, label: &str, count: usize) -> Result<usize, ExamError> {
        self.ask_until(label, |reply| parse_selection(reply, count))
    }

    fn ask_until<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, ExamError>,
    ) -> Result<T, ExamError> {
        let mut attempt = 1;
        loop {
            let reply = self.ask(label)?;
            match parse(&reply) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() && attempt < self.attempts.get() => {
                    tracing::warn!(attempt, error = %e, "rejected reply");
                    self.say(format!("Invalid input: {}. Please try again.", e))?;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

pub fn parse_number<T: FromStr>(reply: &str, expected: &'static str) -> Result<T, ExamError> {
    let trimmed = reply.trim();
    trimmed.parse().map_err(|_| ExamError::Parse {
        input: trimmed.to_string(),
        expected,
    })
}

pub fn parse_selection(reply: &str, count: usize) -> Result<usize, ExamError> {
    let selection: usize = parse_number(reply, "a choice number")?;
    if selection == 0 || selection > count {
        return Err(ExamError::OutOfRangeSelection { selection, count });
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(" 2 ", 3).unwrap(), 2);
        assert!(matches!(
            parse_selection("0", 3),
            Err(ExamError::OutOfRangeSelection { selection: 0, count: 3 })
        ));
        assert!(matches!(
            parse_selection("4", 3),
            Err(ExamError::OutOfRangeSelection { selection: 4, count: 3 })
        ));
        assert!(matches!(parse_selection("two", 3), Err(ExamError::Parse { .. })));
        assert!(matches!(parse_selection("-1", 3), Err(ExamError::Parse { .. })));
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut console = console("Sky is blue?\r\n");
        assert_eq!(console.ask("Body: ").unwrap(), "Sky is blue?");
        assert_eq!(String::from_utf8(console.output).unwrap(), "Body: ");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut console = console("");
        assert!(matches!(console.ask("Body: "), Err(ExamError::InputClosed)));
    }

    #[test]
    fn test_confirm_is_case_insensitive() {
        let mut console = console("YES\nno\ny\n");
        assert!(console.confirm("Start? ").unwrap());
        assert!(!console.confirm("Start? ").unwrap());
        assert!(!console.confirm("Start? ").unwrap());
    }

    #[test]
    fn test_single_attempt_fails_fast() {
        let mut console = console("abc\n2\n");
        let err = console.ask_number::<u32>("Score: ", "a score").unwrap_err();
        assert!(matches!(err, ExamError::Parse { .. }));
    }

    #[test]
    fn test_reprompt_within_budget() {
        let mut console = console("abc\n9\n2\n").with_attempts(NonZeroU32::new(3).unwrap());
        assert_eq!(console.ask_selection("Pick: ", 3).unwrap(), 2);

        let transcript = String::from_utf8(console.output).unwrap();
        assert_eq!(transcript.matches("Pick: ").count(), 3);
        assert_eq!(transcript.matches("Please try again.").count(), 2);
    }

    #[test]
    fn test_reprompt_budget_exhausted() {
        let mut console = console("abc\n9\n2\n").with_attempts(NonZeroU32::new(2).unwrap());
        let err = console.ask_selection("Pick: ", 3).unwrap_err();
        assert!(matches!(err, ExamError::OutOfRangeSelection { selection: 9, .. }));
    }
}
