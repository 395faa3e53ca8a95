//! Exhaustive game tree explorer
//!
//! Replays whole games against the move selector while steering the opponent
//! through every reply it has not yet tried. Each [`BranchNode`] is one
//! opponent decision point; a node is exhausted once every reply below it has
//! been played out. Exploration of a starting-player configuration stops when
//! its root is exhausted, at which point every reachable game has been seen.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace, warn};

use crate::{
    strategy::MoveSelector,
    tictactoe::{Game, Move, Outcome, Player, Position},
};

/// One opponent decision point
#[derive(Debug, Clone, Default)]
pub struct BranchNode {
    replies: BTreeMap<Position, BranchNode>,
    exhausted: bool,
}

impl BranchNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Replies tried so far, keyed by position
    pub fn replies(&self) -> &BTreeMap<Position, BranchNode> {
        &self.replies
    }

    /// Number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.replies.values().map(BranchNode::node_count).sum::<usize>()
    }

    /// First reply, in the order given, whose subtree is not exhausted.
    ///
    /// Children are created for every reply inspected on the way.
    pub fn next_reply(&mut self, unplayed: &[Position]) -> Option<Position> {
        unplayed
            .iter()
            .copied()
            .find(|&position| !self.replies.entry(position).or_default().exhausted)
    }

    fn child_mut(&mut self, position: Position) -> &mut BranchNode {
        self.replies.entry(position).or_default()
    }
}

/// Results of exploring one starting-player configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationReport {
    pub first_player: Player,
    pub games: usize,
    pub bot_wins: usize,
    pub draws: usize,
    pub opponent_wins: usize,
    /// Branch nodes created during the run
    pub nodes: usize,
    /// Move sequences of every game the opponent won
    pub losing_lines: Vec<Vec<Move>>,
}

impl ExplorationReport {
    fn new(first_player: Player) -> Self {
        ExplorationReport {
            first_player,
            games: 0,
            bot_wins: 0,
            draws: 0,
            opponent_wins: 0,
            nodes: 0,
            losing_lines: Vec::new(),
        }
    }

    fn record(&mut self, outcome: Outcome, moves: &[Move]) {
        self.games += 1;
        match outcome {
            Outcome::BotWins => self.bot_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::OpponentWins => {
                self.opponent_wins += 1;
                self.losing_lines.push(moves.to_vec());
            }
        }
    }

    /// True when no explored game was lost by the bot
    pub fn is_lossless(&self) -> bool {
        self.opponent_wins == 0
    }
}

/// Write reports as pretty-printed JSON.
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn write_reports(reports: &[ExplorationReport], path: &Path) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create report file {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.flush()?;
    Ok(())
}

/// Drives exhaustive exploration against a move selector
#[derive(Debug)]
pub struct Explorer {
    selector: MoveSelector,
}

impl Explorer {
    pub fn new(selector: MoveSelector) -> Self {
        Explorer { selector }
    }

    /// Explore every opponent reply path for one starting player.
    ///
    /// # Errors
    ///
    /// An error here means the engine produced an illegal move; the explorer
    /// itself only plays unplayed cells.
    pub fn explore(&mut self, first_player: Player) -> crate::Result<ExplorationReport> {
        self.explore_with_progress(first_player, |_| {})
    }

    /// Like [`Explorer::explore`], calling `on_game` after every finished game
    #[instrument(skip(self, on_game))]
    pub fn explore_with_progress<F>(
        &mut self,
        first_player: Player,
        mut on_game: F,
    ) -> crate::Result<ExplorationReport>
    where
        F: FnMut(&ExplorationReport),
    {
        let mut root = BranchNode::new();
        let mut report = ExplorationReport::new(first_player);

        while !root.is_exhausted() {
            let mut game = Game::new(first_player);
            let outcome = descend(&mut root, &mut game, &mut self.selector)?;
            if outcome == Outcome::OpponentWins {
                warn!(moves = ?game.moves(), "opponent won an explored game");
            }
            report.record(outcome, game.moves());
            on_game(&report);
        }

        report.nodes = root.node_count();
        info!(
            %first_player,
            games = report.games,
            bot_wins = report.bot_wins,
            draws = report.draws,
            opponent_wins = report.opponent_wins,
            "exploration complete"
        );
        Ok(report)
    }

    /// Explore with the opponent moving first, then with the bot moving first
    pub fn explore_all(&mut self) -> crate::Result<Vec<ExplorationReport>> {
        [Player::Opponent, Player::Bot]
            .into_iter()
            .map(|first_player| self.explore(first_player))
            .collect()
    }
}

/// Play `game` to the end from `node`, descending one node per opponent reply.
///
/// When every reply below `node` is already exhausted the node is marked
/// exhausted and the first unplayed cell is replayed so the game can finish.
/// The node reached by the final move is marked exhausted.
fn descend(
    node: &mut BranchNode,
    game: &mut Game,
    selector: &mut MoveSelector,
) -> crate::Result<Outcome> {
    loop {
        if let Some(outcome) = game.status().outcome() {
            node.exhausted = true;
            return Ok(outcome);
        }
        match game.to_move() {
            Player::Bot => {
                game.play_bot(selector)?;
            }
            Player::Opponent => {
                let unplayed = game.board().unplayed_positions();
                let position = match node.next_reply(&unplayed) {
                    Some(position) => position,
                    None => {
                        node.exhausted = true;
                        *unplayed.first().ok_or(crate::Error::NoValidMoves)?
                    }
                };
                trace!(%position, "opponent reply");
                game.play_opponent(position)?;
                return descend(node.child_mut(position), game, selector);
            }
        }
    }
}
