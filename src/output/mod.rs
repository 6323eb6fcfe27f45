//! Terminal output formatting
//!
//! Board rendering, colour formatting and the static gallows art.

pub mod display;
pub mod formatters;
pub mod graphics;

pub use display::{clear_screen, feedback_message, render_board, render_game_over};
pub use graphics::{HANGMAN_UI, MAX_WRONG_GUESSES};
