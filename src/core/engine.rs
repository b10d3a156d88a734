//! Guess engine state machine
//!
//! Owns the hidden target, the 6x5 attempt grid, and the cursor. Status
//! moves one way (in-progress to won or lost) and only on a row commit.
//! Every invalid operation is a silent no-op, so input surfaces never need
//! to pre-validate.

use super::{CellFeedback, MAX_GUESSES, WORD_LEN, Word, score_cell, score_row};
use rustc_hash::FxHashSet;

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has reached a terminal state
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The guessing state machine
///
/// Rows below the cursor are committed and frozen; the cursor row is
/// mutable up to `WORD_LEN` letters; rows above it are empty.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    target: Word,
    cells: [[Option<u8>; WORD_LEN]; MAX_GUESSES],
    row: usize,
    col: usize,
    status: GameStatus,
}

impl GuessEngine {
    /// Start a fresh game for the given target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            cells: [[None; WORD_LEN]; MAX_GUESSES],
            row: 0,
            col: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Restart with the same target
    pub fn reset(&mut self) {
        self.cells = [[None; WORD_LEN]; MAX_GUESSES];
        self.row = 0;
        self.col = 0;
        self.status = GameStatus::InProgress;
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Current game status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Cursor row index (equals the number of committed rows)
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Cursor column index
    #[inline]
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.col
    }

    /// Number of rows committed so far
    #[inline]
    #[must_use]
    pub const fn committed_rows(&self) -> usize {
        self.row
    }

    /// Write a letter at the cursor and advance the column
    ///
    /// No-op when the row is full, the game is over, or `ch` is not an
    /// ASCII letter.
    pub fn push_letter(&mut self, ch: char) {
        if self.status.is_over() || self.col == WORD_LEN || !ch.is_ascii_alphabetic() {
            return;
        }
        self.cells[self.row][self.col] = Some(ch.to_ascii_lowercase() as u8);
        self.col += 1;
    }

    /// Retreat the column by one and clear that cell
    ///
    /// No-op at column 0 or once the game is over.
    pub fn delete_letter(&mut self) {
        if self.status.is_over() || self.col == 0 {
            return;
        }
        self.col -= 1;
        self.cells[self.row][self.col] = None;
    }

    /// Commit a fully-typed row and evaluate the outcome
    ///
    /// Advances the cursor to the next row, then settles status: the
    /// committed row matching the target wins; using the last row without
    /// a win loses. No-op on a partial row or once the game is over.
    pub fn commit_row(&mut self) {
        if self.status.is_over() || self.col < WORD_LEN {
            return;
        }

        let committed = self.row;
        self.row += 1;
        self.col = 0;

        if self.row_matches_target(committed) {
            self.status = GameStatus::Won;
        } else if self.row == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }
    }

    fn row_matches_target(&self, row: usize) -> bool {
        self.cells[row]
            .iter()
            .zip(self.target.letters())
            .all(|(cell, &letter)| *cell == Some(letter))
    }

    /// Letter at a grid cell, if one has been typed
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(|cell| cell.map(char::from))
    }

    /// True when the cursor points at this cell
    #[inline]
    #[must_use]
    pub const fn is_cursor(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    /// Feedback for a grid cell, recomputed on demand
    ///
    /// Rows at or past the cursor are always unrevealed, so inspecting the
    /// grid can never leak the target.
    #[must_use]
    pub fn cell_feedback(&self, row: usize, col: usize) -> CellFeedback {
        if row >= self.row || col >= WORD_LEN {
            return CellFeedback::Unrevealed;
        }
        match self.cells[row][col] {
            Some(letter) => score_cell(letter, col, &self.target),
            None => CellFeedback::Unrevealed,
        }
    }

    /// Feedback for one committed row, or None if the row is not committed
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<[CellFeedback; WORD_LEN]> {
        if row >= self.row {
            return None;
        }
        let mut letters = [0u8; WORD_LEN];
        for (i, cell) in self.cells[row].iter().enumerate() {
            letters[i] = (*cell)?;
        }
        Some(score_row(&letters, &self.target))
    }

    /// Distinct letters across committed cells with the given feedback
    ///
    /// Used to color the virtual keyboard; only committed rows contribute.
    #[must_use]
    pub fn letters_with_feedback(&self, kind: CellFeedback) -> FxHashSet<char> {
        let mut letters = FxHashSet::default();
        for row in 0..self.row {
            for col in 0..WORD_LEN {
                if self.cell_feedback(row, col) == kind
                    && let Some(ch) = self.cell(row, col)
                {
                    letters.insert(ch);
                }
            }
        }
        letters
    }
}
