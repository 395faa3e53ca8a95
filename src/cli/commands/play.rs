//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    app::EngineConfig,
    cli::output::render_board,
    strategy::MoveSelector,
    tictactoe::{Board, Labels, Opponent, Outcome, Player, Position, play},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the engine")]
pub struct PlayArgs {
    /// Who moves first (`bot` or `opponent`); tossed when omitted
    #[arg(long)]
    pub first: Option<Player>,

    /// Random seed for the coin toss and the engine's fallback moves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// An opponent reading positions from a line-oriented terminal.
///
/// Input that is not a free position prints a message and prompts again.
pub struct TerminalOpponent<R, W> {
    input: R,
    output: W,
    labels: Labels,
}

impl<R: BufRead, W: Write> TerminalOpponent<R, W> {
    pub fn new(input: R, output: W, labels: Labels) -> Self {
        TerminalOpponent {
            input,
            output,
            labels,
        }
    }

    fn read_line(&mut self) -> crate::Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| crate::Error::Io {
                operation: "read a move".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(crate::Error::Io {
                operation: "read a move".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line)
    }

    fn parse_free(board: &Board, line: &str) -> crate::Result<Position> {
        let position: Position = line.parse()?;
        if board.is_unplayed(position.coord()) {
            Ok(position)
        } else {
            Err(crate::Error::IllegalMove {
                position: position.get(),
            })
        }
    }
}

impl<R: BufRead, W: Write> Opponent for TerminalOpponent<R, W> {
    fn next_move(&mut self, board: &Board) -> crate::Result<Position> {
        writeln!(self.output, "\n{}\n", render_board(board, self.labels))?;
        loop {
            write!(
                self.output,
                "Your move ({}), 1-9: ",
                self.labels.opponent
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            match Self::parse_free(board, &line) {
                Ok(position) => return Ok(position),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = EngineConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(first) = args.first {
        config = config.with_first_player(first);
    }

    let mut selector = MoveSelector::from_config(&config);
    let first_player = config.first_player.unwrap_or_else(|| selector.toss());
    let labels = Labels::for_first_player(first_player);

    println!(
        "You are {}, the engine is {}. {} moves first.",
        labels.opponent, labels.bot, first_player
    );

    let stdin = io::stdin();
    let mut opponent = TerminalOpponent::new(stdin.lock(), io::stdout(), labels);
    let record = play(&mut opponent, Some(first_player), &mut selector)?;

    println!("\n{}\n", render_board(&record.board, labels));
    match record.outcome {
        Outcome::Draw => println!("Draw."),
        Outcome::OpponentWins => println!("You win!"),
        Outcome::BotWins => println!("The engine wins."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn terminal_opponent_reprompts_until_free_cell() {
        let board = Board::from_string("B........").unwrap();
        let input = Cursor::new("abc\n10\n1\n2\n");
        let mut output = Vec::new();
        let labels = Labels::for_first_player(Player::Bot);
        let position = TerminalOpponent::new(input, &mut output, labels)
            .next_move(&board)
            .unwrap();
        assert_eq!(position.get(), 2);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Your move").count(), 4);
        assert!(text.contains("already occupied"));
        assert!(text.contains("out of bounds"));
    }

    #[test]
    fn terminal_opponent_fails_on_closed_input() {
        let board = Board::new();
        let labels = Labels::for_first_player(Player::Opponent);
        let err = TerminalOpponent::new(Cursor::new(""), Vec::new(), labels)
            .next_move(&board)
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io { .. }));
    }
}
