//! Static positional heuristics
//!
//! Each corner or side rule is written for the top-left orientation only and
//! checked in all four orientations through the symmetry adapter.

use crate::tictactoe::{Board, Cell, Coord, Player, first_in_any_rotation};

const TOP_LEFT: Coord = Coord::new(0, 0);
const BOTTOM_RIGHT: Coord = Coord::new(2, 2);
const TOP_SIDE: Coord = Coord::new(0, 1);

pub fn center(board: &Board) -> Option<Coord> {
    board.is_unplayed(Coord::CENTER).then_some(Coord::CENTER)
}

/// Opponent holds a corner and the diagonally opposite corner is free
pub fn opposite_corner(board: &Board) -> Option<Coord> {
    first_in_any_rotation(
        |b: &Board| {
            (b.get(TOP_LEFT) == Cell::Opponent && b.is_unplayed(BOTTOM_RIGHT)).then_some(BOTTOM_RIGHT)
        },
        board,
    )
}

pub fn empty_corner(board: &Board) -> Option<Coord> {
    first_in_any_rotation(|b: &Board| b.is_unplayed(TOP_LEFT).then_some(TOP_LEFT), board)
}

pub fn empty_side(board: &Board) -> Option<Coord> {
    first_in_any_rotation(|b: &Board| b.is_unplayed(TOP_SIDE).then_some(TOP_SIDE), board)
}

/// Opening book, applied only while the bot has no mark on the board
pub fn opening(board: &Board) -> Option<Coord> {
    if board.has_mark(Player::Bot) {
        return None;
    }
    if !board.has_mark(Player::Opponent) {
        return empty_corner(board);
    }
    if board.marks(Player::Opponent).iter().any(|c| c.is_corner()) {
        return center(board);
    }
    if board.get(Coord::CENTER) == Cell::Opponent {
        return empty_corner(board);
    }
    center(board)
}
