//! Explore command - Play every opponent reply path against the engine

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::EngineConfig,
    cli::output::{create_spinner, print_kv, print_section},
    explorer::{ExplorationReport, Explorer, write_reports},
    strategy::MoveSelector,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively explore every game the opponent can force")]
pub struct ExploreArgs {
    /// Random seed for the engine's fallback moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the reports as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: ExploreArgs) -> Result<()> {
    let mut config = EngineConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut explorer = Explorer::new(MoveSelector::from_config(&config));

    let mut reports = Vec::with_capacity(2);
    for first_player in [Player::Opponent, Player::Bot] {
        let report = if args.no_progress {
            explorer.explore(first_player)?
        } else {
            let spinner = create_spinner(&format!("{first_player} first"));
            let report = explorer.explore_with_progress(first_player, |progress| {
                spinner.set_message(format!(
                    "{first_player} first: {} games",
                    progress.games
                ));
                spinner.tick();
            })?;
            spinner.finish_and_clear();
            report
        };
        print_report(&report);
        reports.push(report);
    }

    if let Some(path) = &args.export {
        write_reports(&reports, path)?;
        println!("\nReports written to {}", path.display());
    }

    let losses: usize = reports.iter().map(|r| r.opponent_wins).sum();
    if losses > 0 {
        anyhow::bail!("the opponent won {losses} explored games");
    }
    Ok(())
}

fn print_report(report: &ExplorationReport) {
    print_section(&format!("{} moves first", report.first_player));
    let stats = [
        ("Games", report.games),
        ("Bot wins", report.bot_wins),
        ("Draws", report.draws),
        ("Opponent wins", report.opponent_wins),
        ("Branch nodes", report.nodes),
    ];
    for (key, value) in stats {
        print_kv(key, &value.to_string());
    }
    for (i, line) in report.losing_lines.iter().enumerate() {
        let moves: Vec<String> = line
            .iter()
            .map(|m| format!("{}:{}", m.player, m.position))
            .collect();
        print_kv(&format!("Loss {}", i + 1), &moves.join(" "));
    }
}
