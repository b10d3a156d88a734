//! Share-text formatting
//!
//! Turns the committed grid into the classic emoji share block. Clipboard
//! integration is the caller's concern; this module only produces the text.

use crate::core::{CellFeedback, GameStatus, GuessEngine, MAX_GUESSES};

/// Symbol for one feedback kind in the share grid
#[must_use]
pub const fn feedback_symbol(feedback: CellFeedback) -> char {
    match feedback {
        CellFeedback::Exact => '🟩',
        CellFeedback::Present => '🟨',
        CellFeedback::Absent | CellFeedback::Unrevealed => '⬜',
    }
}

/// Render the committed grid: one line per row, one symbol per cell
#[must_use]
pub fn share_grid(engine: &GuessEngine) -> String {
    let mut grid = String::new();
    for row in 0..engine.committed_rows() {
        if let Some(feedback) = engine.row_feedback(row) {
            if !grid.is_empty() {
                grid.push('\n');
            }
            for cell in feedback {
                grid.push(feedback_symbol(cell));
            }
        }
    }
    grid
}

/// Full share block with the score header
///
/// The header reads `WORDLE <day> <guesses>/6`, with `X` in place of the
/// guess count on a loss.
///
/// # Examples
/// ```
/// use wordle_tui::core::{GuessEngine, Word};
/// use wordle_tui::output::share_message;
///
/// let mut game = GuessEngine::new(Word::new("hello").unwrap());
/// for ch in "hello".chars() {
///     game.push_letter(ch);
/// }
/// game.commit_row();
///
/// let message = share_message(&game, 7);
/// assert!(message.starts_with("WORDLE 7 1/6"));
/// ```
#[must_use]
pub fn share_message(engine: &GuessEngine, day: u32) -> String {
    let score = match engine.status() {
        GameStatus::Won => engine.committed_rows().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };
    format!("WORDLE {day} {score}/{MAX_GUESSES}\n\n{}", share_grid(engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn played(target: &str, guesses: &[&str]) -> GuessEngine {
        let mut game = GuessEngine::new(Word::new(target).unwrap());
        for guess in guesses {
            for ch in guess.chars() {
                game.push_letter(ch);
            }
            game.commit_row();
        }
        game
    }

    #[test]
    fn symbol_mapping() {
        assert_eq!(feedback_symbol(CellFeedback::Exact), '🟩');
        assert_eq!(feedback_symbol(CellFeedback::Present), '🟨');
        assert_eq!(feedback_symbol(CellFeedback::Absent), '⬜');
        assert_eq!(feedback_symbol(CellFeedback::Unrevealed), '⬜');
    }

    #[test]
    fn share_grid_empty_before_any_commit() {
        let game = played("hello", &[]);
        assert_eq!(share_grid(&game), "");
    }

    #[test]
    fn share_grid_one_line_per_committed_row() {
        let game = played("hello", &["world", "hello"]);
        let grid = share_grid(&game);

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 2);
        // WORLD vs HELLO: absent, present, absent, exact, absent
        assert_eq!(lines[0], "⬜🟨⬜🟩⬜");
        assert_eq!(lines[1], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_message_on_win() {
        let game = played("hello", &["world", "hello"]);
        let message = share_message(&game, 12);
        assert!(message.starts_with("WORDLE 12 2/6\n\n"));
        assert!(message.ends_with("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn share_message_on_loss() {
        let game = played(
            "hello",
            &["world", "crane", "slate", "brave", "light", "sound"],
        );
        let message = share_message(&game, 3);
        assert!(message.starts_with("WORDLE 3 X/6\n\n"));
        assert_eq!(share_grid(&game).lines().count(), 6);
    }
}
