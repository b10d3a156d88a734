//! Core game types and state machine
//!
//! This module contains the guessing game's domain logic with no terminal,
//! clock, or I/O dependencies. Everything here is pure state and directly
//! testable.

mod engine;
mod feedback;
mod word;

pub use engine::{GameStatus, GuessEngine};
pub use feedback::{CellFeedback, score_cell, score_row};
pub use word::{Word, WordError};

/// Length of every word in the game
pub const WORD_LEN: usize = 5;

/// Number of guess attempts per game
pub const MAX_GUESSES: usize = 6;
