//! noughts CLI - play against, explore and inspect the rule-based engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::commands::{explore, forks, play, suggest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Rule-based noughts and crosses engine", long_about = None)]
struct Cli {
    /// Log at info level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),

    /// Explore every opponent reply path and report the outcomes
    Explore(explore::ExploreArgs),

    /// Show the engine's move for a board
    Suggest(suggest::SuggestArgs),

    /// List the canonical fork masks
    Forks(forks::ForksArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Explore(args) => explore::execute(args),
        Commands::Suggest(args) => suggest::execute(args),
        Commands::Forks(args) => forks::execute(args),
    }
}
