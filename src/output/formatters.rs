//! Formatting utilities for terminal output

use crate::core::{PLACEHOLDER, Round};
use colored::{Color, Colorize};

/// Format the revealed pattern, letters in green and placeholders plain,
/// separated by spaces
#[must_use]
pub fn format_revealed(round: &Round) -> String {
    round
        .revealed_chars()
        .map(|slot| match slot {
            Some(ch) => ch.to_string().green().to_string(),
            None => PLACEHOLDER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a list of guessed letters in a single color
#[must_use]
pub fn format_list(letters: &[char], color: Color) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .color(color)
        .to_string()
}
