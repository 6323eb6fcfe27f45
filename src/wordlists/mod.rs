//! Word lists for hangman
//!
//! Words come from a plain text file read once at startup.

pub mod loader;

pub use loader::{WordListError, load_from_file, pick_word, words_from_text};

/// Word file used when no path is given on the command line
pub const DEFAULT_WORDLIST: &str = "words.txt";
