//! Daily word selection
//!
//! The answer is picked deterministically from the list by day of month,
//! wrapping via modulo. An empty list yields no word; callers surface that
//! as a configuration error.

use crate::core::Word;
use chrono::{Datelike, Local};

/// Pick the word at `index`, wrapping modulo the list length
///
/// Returns `None` on an empty list. Deterministic: the same (list, index)
/// always yields the same word.
#[must_use]
pub fn select_word(words: &[Word], index: usize) -> Option<&Word> {
    if words.is_empty() {
        None
    } else {
        Some(&words[index % words.len()])
    }
}

/// The daily word for a 1-based day of month
#[must_use]
pub fn daily_word(words: &[Word], day_of_month: u32) -> Option<&Word> {
    select_word(words, day_of_month as usize)
}

/// Today's 1-based day of month on the local clock
#[must_use]
pub fn day_of_month() -> u32 {
    Local::now().day()
}
