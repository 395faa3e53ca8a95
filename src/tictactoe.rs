//! Tic-Tac-Toe board model, symmetry adapter, line detectors and game loop

pub mod board;
pub mod game;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, Coord, Move, Player, Position};
pub use game::{Game, GameRecord, Labels, Opponent, Outcome, Status, play};
pub use lines::{status, winning_move, winning_moves};
pub use symmetry::{Match, Reorient, apply_rotated, first_in_any_rotation};
