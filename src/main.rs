//! Termle - CLI
//!
//! Terminal Wordle-style game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use termle::{
    commands::run_simple,
    core::Word,
    interactive::{App, SolutionSource, run_tui},
    words,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "termle",
    about = "Terminal Wordle-style word-guessing game with a remote word source",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use a fixed solution word instead of fetching one
    #[arg(short = 'w', long, global = true)]
    word: Option<String>,

    /// Play with the built-in fallback word, skipping the network entirely
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let source = resolve_source(cli.word.as_deref(), cli.offline)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(source)),
        Commands::Simple => run_simple_command(source),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve where the solution word comes from
///
/// An explicit --word wins over --offline; otherwise the remote source is used.
fn resolve_source(word: Option<&str>, offline: bool) -> Result<SolutionSource> {
    match word {
        Some(text) => {
            let word = Word::new(text).map_err(|e| anyhow::anyhow!("invalid --word: {e}"))?;
            Ok(SolutionSource::Fixed(word))
        }
        None if offline => Ok(SolutionSource::Offline),
        None => Ok(SolutionSource::Remote),
    }
}

fn run_simple_command(source: SolutionSource) -> Result<()> {
    // Simple mode has no render loop to overlap with the fetch, so the
    // solution is resolved up front
    let solution = match source {
        SolutionSource::Fixed(word) => word,
        SolutionSource::Offline => words::fallback_word(),
        SolutionSource::Remote => {
            println!("Fetching a word from the dictionary...");
            words::fetch_solution()
        }
    };

    run_simple(solution)
}
