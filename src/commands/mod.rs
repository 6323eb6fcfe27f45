//! Command implementations

pub mod play;

pub use play::{SessionSummary, play_round, run_session, wants_replay};
