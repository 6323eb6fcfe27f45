//! Word list loading utilities
//!
//! Reads the word file once at startup and picks target words from it.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that make a word list unusable
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Error reading words file '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list is empty. Make sure '{}' has words in it.", .path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// The content is split on whitespace and every token lowercased.
///
/// # Errors
///
/// Returns [`WordListError::Unreadable`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(count = words.len(), path = %path.display(), "loaded word list");
    Ok(words)
}

/// Split text on whitespace into lowercase words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Apple  banana\ncherry\n");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].text(), "apple");
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Pick a word uniformly at random
///
/// Returns `None` only when `words` is empty.
pub fn pick_word<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
