//! Hangman - CLI
//!
//! Single-player terminal hangman: guess letters or the whole word before the
//! gallows is complete.

use anyhow::Result;
use clap::Parser;
use hangman::{
    commands::run_session,
    interactive::Console,
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    /// Path to a whitespace-separated word file
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Send logs to stderr so they never land on the game screen
///
/// `RUST_LOG` wins over `-v` when set.
fn configure_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose);

    let words = load_from_file(&cli.wordlist)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    run_session(&mut console, &words, &mut rand::rng())?;
    Ok(())
}
