//! Suggest command - Show the engine's move for a given board

use anyhow::Result;
use clap::Parser;

use crate::{
    app::EngineConfig,
    cli::output::{print_kv, render_board},
    strategy::MoveSelector,
    tictactoe::{Board, Labels, Player, Status},
};

#[derive(Parser, Debug)]
#[command(about = "Print the engine's move for a board")]
pub struct SuggestArgs {
    /// Nine cells, row by row: `O` opponent, `B` bot, `.` unplayed
    /// (e.g. "BO./.O./...")
    pub board: String,

    /// Random seed for the fallback move
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let labels = Labels::for_first_player(Player::Opponent);
    println!("{}\n", render_board(&board, labels));

    if let Status::Finished(outcome) = crate::tictactoe::status(&board) {
        print_kv("Game over", &format!("{outcome:?}"));
        return Ok(());
    }

    let mut config = EngineConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let choice = MoveSelector::from_config(&config).choose(&board)?;
    let rule = choice
        .rule
        .map_or_else(|| "random".to_string(), |rule| rule.to_string());
    print_kv("Rule", &rule);
    print_kv("Position", &choice.position.to_string());
    Ok(())
}
