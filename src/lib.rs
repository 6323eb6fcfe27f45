//! Hangman
//!
//! A single-player terminal hangman game with ASCII-art gallows and replay.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, Word};
//! use hangman::output::MAX_WRONG_GUESSES;
//!
//! let mut round = Round::new(Word::new("banana").unwrap(), MAX_WRONG_GUESSES);
//! assert_eq!(round.guess("a"), GuessOutcome::LetterCorrect);
//! assert_eq!(round.revealed(), "_a_a_a");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Terminal I/O context
pub mod interactive;
