//! Screen rendering for the game loop
//!
//! Everything writes to a caller-supplied writer so the same code drives the
//! real terminal and in-memory buffers in tests.

use super::formatters::{format_list, format_revealed};
use super::graphics;
use crate::core::{GuessOutcome, Round, RoundStatus};
use colored::{Color, Colorize};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const ALREADY_GUESSED_MSG: &str = "You've already guessed that letter!";
const WIN_MSG: &str = "Congratulations! You guessed the word!";
const LOSS_MSG: &str = "Sorry, you lost. The word was: ";

/// Clear the terminal and home the cursor
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Draw the board: revealed word, wrong letters and the gallows frame
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    clear_screen(out)?;
    writeln!(out, "{}", format_revealed(round))?;
    writeln!(
        out,
        "Wrong guesses: {}",
        format_list(round.wrong_guesses(), Color::Red)
    )?;
    writeln!(out, "{}", graphics::frame(round.wrong_count()))?;
    out.flush()
}

/// Feedback line for an outcome that needs one
///
/// Productive outcomes are visible on the board itself and get no message.
#[must_use]
pub fn feedback_message(outcome: GuessOutcome) -> Option<String> {
    match outcome {
        GuessOutcome::AlreadyGuessed => Some(ALREADY_GUESSED_MSG.yellow().to_string()),
        GuessOutcome::WordWrong => Some("That's not the word!".red().to_string()),
        GuessOutcome::Empty => Some("Type a letter or a whole word.".yellow().to_string()),
        GuessOutcome::WholeWordCorrect
        | GuessOutcome::LetterCorrect
        | GuessOutcome::LetterWrong
        | GuessOutcome::Finished => None,
    }
}

/// Show the end-of-round screen with stats
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_game_over<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let word = round.target().text();

    clear_screen(out)?;
    if round.status() == RoundStatus::Won {
        writeln!(out, "{}", WIN_MSG.yellow())?;
    } else {
        writeln!(out, "{}", format!("{LOSS_MSG}{word}").red())?;
    }

    writeln!(out, "Stats:")?;
    writeln!(out, "    - Total guesses: {}", round.total_guesses())?;
    writeln!(out, "    - Wrong guesses: {}", round.wrong_count())?;
    writeln!(out, "    - Correct word: {word}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn board_shows_frame_for_wrong_count() {
        let mut round = Round::new(Word::new("cat").unwrap(), 6);
        round.guess("x");
        round.guess("y");

        let screen = render(|out| render_board(out, &round));
        assert!(screen.contains("Wrong guesses: "));
        assert!(screen.contains(graphics::HANGMAN_UI[2]));
        assert!(screen.contains('x'));
        assert!(screen.contains('y'));
    }

    #[test]
    fn board_starts_by_clearing() {
        let round = Round::new(Word::new("cat").unwrap(), 6);
        let screen = render(|out| render_board(out, &round));
        assert!(screen.starts_with('\x1b'));
        assert!(screen.contains("_ _ _"));
    }

    #[test]
    fn game_over_win_stats() {
        let mut round = Round::new(Word::new("cat").unwrap(), 6);
        round.guess("z");
        round.guess("cat");

        let screen = render(|out| render_game_over(out, &round));
        assert!(screen.contains(WIN_MSG));
        assert!(screen.contains("Total guesses: 2"));
        assert!(screen.contains("Wrong guesses: 1"));
        assert!(screen.contains("Correct word: cat"));
    }

    #[test]
    fn game_over_loss_names_word() {
        let mut round = Round::new(Word::new("dog").unwrap(), 1);
        round.guess("q");

        let screen = render(|out| render_game_over(out, &round));
        assert!(screen.contains("Sorry, you lost. The word was: dog"));
        assert!(!screen.contains(WIN_MSG));
    }

    #[test]
    fn feedback_only_for_unproductive_outcomes() {
        assert!(feedback_message(GuessOutcome::AlreadyGuessed).is_some());
        assert!(feedback_message(GuessOutcome::WordWrong).is_some());
        assert!(feedback_message(GuessOutcome::LetterCorrect).is_none());
        assert!(feedback_message(GuessOutcome::LetterWrong).is_none());
    }
}
