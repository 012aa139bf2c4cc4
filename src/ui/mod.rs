//! Text rendering for the exam transcript.

pub mod quiz;
pub mod result;
pub mod welcome;

use crossterm::style::{self, Color, Stylize};

/// Style `text` with `color` when styling is enabled.
fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style::style(text).with(color).bold().to_string()
    } else {
        text.to_string()
    }
}
