//! Core domain types for hangman
//!
//! Pure game state with no terminal or file I/O, so every rule is unit-testable.

mod round;
mod word;

pub use round::{GuessOutcome, PLACEHOLDER, Round, RoundStatus};
pub use word::{Word, WordError};
