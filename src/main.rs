//! Wordle - CLI
//!
//! Daily word-guessing puzzle with TUI and plain CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use wordle_tui::{
    commands::run_simple,
    core::Word,
    wordlists::{
        WORDS, daily_word, day_of_month,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Daily word-guessing puzzle for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Override the day of month (1-31) used to pick the daily word
    #[arg(short, long, global = true)]
    day: Option<u32>,

    /// Practice mode: pick a random word instead of the daily one
    #[arg(short, long, global = true)]
    random: bool,

    /// Play a specific target word
    #[arg(long, global = true)]
    word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let day = cli.day.unwrap_or_else(day_of_month);
    let target = pick_target(&cli, &words, day)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(target, day),
        Commands::Simple => run_simple(target, day).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Load the word list based on the -w flag
///
/// An empty word source is the only fatal configuration error.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("failed to load wordlist from {path}"))?,
    };

    if words.is_empty() {
        bail!("word list is empty; the game needs at least one 5-letter word");
    }

    Ok(words)
}

/// Resolve the hidden word from the CLI flags
fn pick_target(cli: &Cli, words: &[Word], day: u32) -> Result<Word> {
    if let Some(word) = &cli.word {
        return Word::new(word).map_err(|e| anyhow::anyhow!("invalid --word: {e}"));
    }

    if cli.random {
        let word = words
            .choose(&mut rand::rng())
            .context("word list is empty")?;
        return Ok(word.clone());
    }

    daily_word(words, day).cloned().context("word list is empty")
}

fn run_play_command(target: Word, day: u32) -> Result<()> {
    use wordle_tui::interactive::{App, run_tui};

    let app = App::new(target, day);
    run_tui(app)
}
