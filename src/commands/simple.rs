//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{GuessEngine, MAX_GUESSES, WORD_LEN, Word};
use crate::output::display::{print_committed_row, print_game_over, print_letter_status};
use std::io::{self, Write as _};

/// Run the plain CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(target: Word, day: u32) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      W O R D L E                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LEN}-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - Green:  correct position");
    println!("  - Yellow: in the word, wrong position");
    println!("  - Gray:   not in the word\n");
    println!("Commands: 'quit' to exit, 'new' to restart\n");

    let mut engine = GuessEngine::new(target);

    loop {
        let turn = engine.committed_rows() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                if guess.len() != WORD_LEN || !guess.bytes().all(|b| b.is_ascii_alphabetic()) {
                    println!("❌ Please enter a {WORD_LEN}-letter word.\n");
                    continue;
                }
                for ch in guess.chars() {
                    engine.push_letter(ch);
                }
                engine.commit_row();
            }
        }

        println!();
        for row in 0..engine.committed_rows() {
            print_committed_row(&engine, row);
        }
        println!();
        print_letter_status(&engine);
        println!();

        if engine.status().is_over() {
            print_game_over(&engine, day);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
