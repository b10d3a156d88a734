//! Colored terminal output for the plain CLI mode

use crate::core::{CellFeedback, GameStatus, GuessEngine, MAX_GUESSES, WORD_LEN};
use crate::output::formatters::share_message;
use colored::Colorize;

/// Print one committed row with its feedback colors
pub fn print_committed_row(engine: &GuessEngine, row: usize) {
    print!("   ");
    for col in 0..WORD_LEN {
        let Some(ch) = engine.cell(row, col) else {
            continue;
        };
        let cell = format!(" {} ", ch.to_ascii_uppercase());
        let styled = match engine.cell_feedback(row, col) {
            CellFeedback::Exact => cell.black().on_green(),
            CellFeedback::Present => cell.black().on_yellow(),
            CellFeedback::Absent => cell.white().on_bright_black(),
            CellFeedback::Unrevealed => cell.normal(),
        };
        print!("{styled}");
    }
    println!();
}

/// Print every letter a-z colored by its best-known feedback
///
/// Exact beats present beats absent, matching the virtual keyboard.
pub fn print_letter_status(engine: &GuessEngine) {
    let exact = engine.letters_with_feedback(CellFeedback::Exact);
    let present = engine.letters_with_feedback(CellFeedback::Present);
    let absent = engine.letters_with_feedback(CellFeedback::Absent);

    print!("   ");
    for ch in 'a'..='z' {
        let key = ch.to_ascii_uppercase().to_string();
        let styled = if exact.contains(&ch) {
            key.black().on_green()
        } else if present.contains(&ch) {
            key.black().on_yellow()
        } else if absent.contains(&ch) {
            key.white().on_bright_black()
        } else {
            key.normal()
        };
        print!("{styled} ");
    }
    println!();
}

/// Print the end-of-game banner, the reveal on a loss, and the share block
pub fn print_game_over(engine: &GuessEngine, day: u32) {
    match engine.status() {
        GameStatus::Won => {
            let turns = engine.committed_rows();
            println!(
                "\n{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "\n{} The word was {}.",
                format!("❌ Out of tries ({MAX_GUESSES}/{MAX_GUESSES}).").red().bold(),
                engine.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return,
    }

    println!("\n{}\n", share_message(engine, day));
}
