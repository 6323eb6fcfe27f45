//! Hangman target word representation
//!
//! A Word stores the lowercase text along with letter position indices so a
//! single guess can reveal every occurrence at once.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A hangman target word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace")]
    ContainsWhitespace,
}

impl Word {
    /// Create a new Word from a string, lowercasing it
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.positions_of('a'), &[1, 3, 5]);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an empty word cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
