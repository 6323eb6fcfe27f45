//! Interactive hangman game loop
//!
//! `play_round` drives one word from first prompt to the end screen;
//! `run_session` repeats rounds until the player declines a replay.

use crate::core::{Round, RoundStatus, Word};
use crate::interactive::Console;
use crate::output::{MAX_WRONG_GUESSES, feedback_message, render_board, render_game_over};
use crate::wordlists::pick_word;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, trace};

pub const GUESS_PROMPT: &str = "Guess a letter or the word: ";
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (yes/no) ";
const PLAY_AGAIN_OPTIONS: [&str; 2] = ["yes", "y"];

/// Totals across every finished round of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Play a single round against `target`
///
/// Returns the finished round, or `None` if input ended mid-round.
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    target: Word,
) -> Result<Option<Round>> {
    let mut round = Round::new(target, MAX_WRONG_GUESSES);
    let mut feedback: Option<String> = None;

    while !round.is_over() {
        render_board(console.out(), &round).context("failed to draw board")?;
        if let Some(message) = feedback.take() {
            writeln!(console.out(), "{message}")?;
        }

        let Some(answer) = console.prompt(GUESS_PROMPT)? else {
            debug!("input closed mid-round");
            return Ok(None);
        };

        let outcome = round.guess(&answer);
        debug!(
            ?outcome,
            total = round.total_guesses(),
            wrong = round.wrong_count(),
            "guess evaluated"
        );
        feedback = feedback_message(outcome);
    }

    render_game_over(console.out(), &round).context("failed to draw end screen")?;
    info!(
        status = ?round.status(),
        total = round.total_guesses(),
        wrong = round.wrong_count(),
        "round finished"
    );
    Ok(Some(round))
}

/// Play rounds until the player declines a replay or input ends
///
/// # Errors
///
/// Returns an error if `words` is empty or terminal I/O fails.
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    words: &[Word],
    rng: &mut G,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();

    loop {
        let target = pick_word(words, rng)
            .context("cannot start a round without words")?
            .clone();
        debug!(length = target.len(), "picked word");
        trace!(word = %target, "target");

        let Some(round) = play_round(console, target)? else {
            break;
        };

        summary.rounds_played += 1;
        if round.status() == RoundStatus::Won {
            summary.rounds_won += 1;
        }

        let answer = console.prompt(PLAY_AGAIN_PROMPT)?;
        if !answer.as_deref().is_some_and(wants_replay) {
            break;
        }
    }

    info!(
        played = summary.rounds_played,
        won = summary.rounds_won,
        "session over"
    );
    Ok(summary)
}

/// Whether a replay answer is affirmative
#[must_use]
pub fn wants_replay(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    PLAY_AGAIN_OPTIONS.contains(&answer.as_str())
}
