//! ASCII-art gallows frames
//!
//! One frame per wrong-guess count. The number of frames is the wrong-guess
//! budget: the round is lost when the count reaches `HANGMAN_UI.len()`.

/// Frames indexed by the number of wrong guesses so far
pub const HANGMAN_UI: [&str; 6] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
];

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: usize = HANGMAN_UI.len();

/// Frame for `wrong_count` wrong guesses, clamped to the last frame
#[must_use]
pub fn frame(wrong_count: usize) -> &'static str {
    HANGMAN_UI[wrong_count.min(HANGMAN_UI.len() - 1)]
}
