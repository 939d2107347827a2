//! Whydle - CLI
//!
//! Play Wordle in the terminal, or check guesses and word lists from the shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use whydle::{
    commands::{check_guess, summarize_word_list},
    game::Game,
    output::{print_check_result, print_session_stats, print_word_list_summary},
    wordlists::{
        WordList,
        loader::{LoadMode, LoadReport, load_embedded, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "whydle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Abort on malformed word list lines instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for target selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word (must be in the word list)
        guess: String,

        /// The target word
        target: String,
    },

    /// Validate the word list and report rejected lines
    Words,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mode = if cli.strict {
        LoadMode::Strict
    } else {
        LoadMode::Lenient
    };

    let (words, report) = load_word_list(cli.wordlist.as_deref(), mode)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words, cli.seed),
        Commands::Check { guess, target } => run_check_command(&guess, &target, &words),
        Commands::Words => {
            run_words_command(cli.wordlist.as_deref(), &words, &report);
            Ok(())
        }
    }
}

/// Load the word list named by `-w`, or the built-in list
fn load_word_list(path: Option<&Path>, mode: LoadMode) -> Result<(WordList, LoadReport)> {
    match path {
        Some(path) => load_from_file(path, mode)
            .with_context(|| format!("cannot start without a word list ({})", path.display())),
        None => {
            let words = load_embedded().context("built-in word list is empty")?;
            let report = LoadReport {
                accepted: words.len(),
                ..LoadReport::default()
            };
            Ok((words, report))
        }
    }
}

fn run_play_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    use whydle::interactive::run_tui;

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stats = run_tui(Game::new(words, rng))?;
    print_session_stats(&stats);
    Ok(())
}

fn run_check_command(guess: &str, target: &str, words: &WordList) -> Result<()> {
    let result = check_guess(guess, target, words).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_words_command(path: Option<&Path>, words: &WordList, report: &LoadReport) {
    let source = path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    let summary = summarize_word_list(&source, words, report);
    print_word_list_summary(&summary);
}
