//! Word list for the daily game
//!
//! Provides the embedded word list compiled into the binary plus loading
//! and daily-selection utilities.

pub mod daily;
mod embedded;
pub mod loader;

pub use daily::{daily_word, day_of_month, select_word};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LEN;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn list_covers_every_day_of_month() {
        // With at least 31 words, consecutive days get distinct words
        assert!(WORDS_COUNT >= 31, "Expected at least 31 words");
    }
}
