//! Per-cell guess feedback
//!
//! Feedback is derived from the committed grid and the target on demand,
//! never stored. The rule is positional: a cell is exact when its letter
//! matches the target at that position, present when the target contains
//! the letter anywhere, absent otherwise. A repeated guess letter is not
//! capped by its count in the target.

use super::{WORD_LEN, Word};

/// Classification of a single grid cell against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFeedback {
    /// Row not committed yet; reveals nothing about the target
    Unrevealed,
    /// Letter in the correct position
    Exact,
    /// Letter in the target, at a different position
    Present,
    /// Letter not in the target
    Absent,
}

impl CellFeedback {
    /// True for feedback that comes from a committed row
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Unrevealed)
    }
}

/// Score a single committed letter at a given position
///
/// # Examples
/// ```
/// use wordle_tui::core::{CellFeedback, Word, score_cell};
///
/// let target = Word::new("hello").unwrap();
/// assert_eq!(score_cell(b'h', 0, &target), CellFeedback::Exact);
/// assert_eq!(score_cell(b'o', 1, &target), CellFeedback::Present);
/// assert_eq!(score_cell(b'z', 2, &target), CellFeedback::Absent);
/// ```
#[must_use]
pub fn score_cell(letter: u8, position: usize, target: &Word) -> CellFeedback {
    if target.letter_at(position) == letter {
        CellFeedback::Exact
    } else if target.contains(letter) {
        CellFeedback::Present
    } else {
        CellFeedback::Absent
    }
}

/// Score one committed row against the target
#[must_use]
pub fn score_row(row: &[u8; WORD_LEN], target: &Word) -> [CellFeedback; WORD_LEN] {
    let mut result = [CellFeedback::Absent; WORD_LEN];
    for (i, &letter) in row.iter().enumerate() {
        result[i] = score_cell(letter, i, target);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellFeedback::{Absent, Exact, Present};

    #[test]
    fn score_row_all_exact() {
        let target = Word::new("hello").unwrap();
        let result = score_row(b"hello", &target);
        assert_eq!(result, [Exact; WORD_LEN]);
    }

    #[test]
    fn score_row_all_absent() {
        let target = Word::new("hello").unwrap();
        let result = score_row(b"jumpy", &target);
        assert_eq!(result, [Absent; WORD_LEN]);
    }

    #[test]
    fn score_row_world_vs_hello() {
        // W and R and D are not in HELLO; O is present elsewhere; the L at
        // position 3 lines up with HELLO's second L, so it is exact.
        let target = Word::new("hello").unwrap();
        let result = score_row(b"world", &target);
        assert_eq!(result, [Absent, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn score_row_mixed() {
        let target = Word::new("hello").unwrap();
        let result = score_row(b"olive", &target);
        // o-l-i-v-e vs h-e-l-l-o: O present, L present, I absent, V absent,
        // E present
        assert_eq!(result, [Present, Present, Absent, Absent, Present]);
    }

    #[test]
    fn repeated_guess_letters_not_capped() {
        // HELLO has a single E, yet every non-exact E in the guess is
        // still marked present.
        let target = Word::new("hello").unwrap();
        let result = score_row(b"eeeee", &target);
        assert_eq!(result, [Present, Exact, Present, Present, Present]);
    }

    #[test]
    fn repeated_target_letters() {
        let target = Word::new("hello").unwrap();
        let result = score_row(b"lolly", &target);
        // L present, O present, L exact, L exact, Y absent
        assert_eq!(result, [Present, Present, Exact, Exact, Absent]);
    }

    #[test]
    fn is_revealed() {
        assert!(Exact.is_revealed());
        assert!(Present.is_revealed());
        assert!(Absent.is_revealed());
        assert!(!CellFeedback::Unrevealed.is_revealed());
    }
}
