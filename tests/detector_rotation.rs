use std::collections::{BTreeSet, HashSet};

use noughts::{
    strategy::{block_fork, canonical_forks, fork_moves, positional},
    tictactoe::{Board, Cell, Coord, Match, Player, apply_rotated, status, winning_moves},
};

/// Every board reachable by legal play from either starting player,
/// terminal boards included
fn reachable_boards() -> Vec<Board> {
    fn visit(board: Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
        if !seen.insert((board, to_move)) || status(&board).is_finished() {
            return;
        }
        for position in board.unplayed_positions() {
            let next = board.apply_move(position, to_move).unwrap();
            visit(next, to_move.other(), seen);
        }
    }

    let mut seen = HashSet::new();
    visit(Board::new(), Player::Opponent, &mut seen);
    visit(Board::new(), Player::Bot, &mut seen);
    let boards: HashSet<Board> = seen.into_iter().map(|(board, _)| board).collect();
    boards.into_iter().collect()
}

fn as_set(coords: Vec<Coord>) -> BTreeSet<Coord> {
    coords.into_iter().collect()
}

#[test]
fn terminal_status_is_rotation_invariant() {
    for board in reachable_boards() {
        for turns in 1..4 {
            assert_eq!(status(&board.rotated(turns)), status(&board), "{board}");
        }
    }
}

#[test]
fn threats_map_back_through_the_adapter() {
    for board in reachable_boards() {
        for player in [Player::Opponent, Player::Bot] {
            let direct = as_set(winning_moves(player, &board));
            for turns in 0..4 {
                let via = apply_rotated(|b: &Board| winning_moves(player, b), &board, turns);
                assert_eq!(as_set(via), direct, "{board}\nturns {turns}");
            }
        }
    }
}

#[test]
fn fork_cells_map_back_through_the_adapter() {
    for board in reachable_boards() {
        for player in [Player::Opponent, Player::Bot] {
            let direct = as_set(fork_moves(player, &board));
            for turns in 1..4 {
                let via = apply_rotated(|b: &Board| fork_moves(player, b), &board, turns);
                assert_eq!(as_set(via), direct, "{board}\nturns {turns}");
            }
        }
    }
}

#[test]
fn detected_cells_are_unplayed_in_the_caller_frame() {
    let detectors: [(&str, fn(&Board) -> Option<Coord>); 6] = [
        ("center", positional::center),
        ("opposite corner", positional::opposite_corner),
        ("empty corner", positional::empty_corner),
        ("empty side", positional::empty_side),
        ("opening", positional::opening),
        ("block fork", block_fork),
    ];
    for board in reachable_boards() {
        if status(&board).is_finished() {
            continue;
        }
        for (name, detector) in detectors {
            for turns in 0..4 {
                if let Some(coord) = apply_rotated(detector, &board, turns) {
                    assert!(board.is_unplayed(coord), "{name} on\n{board}\nturns {turns}");
                }
            }
        }
    }
}

#[test]
fn adapter_result_matches_detector_on_rotated_board() {
    let board = Board::from_string("O...B...O").unwrap();
    for turns in 0..4 {
        let rotated = board.rotated(turns);
        let direct = block_fork(&rotated).map(|c| c.rotated((4 - turns) % 4));
        assert_eq!(apply_rotated(block_fork, &board, turns), direct);
    }

    let center_mark = |b: &Board| Match::Scalar(b.get(Coord::CENTER));
    assert_eq!(apply_rotated(center_mark, &board, 3), Match::Scalar(Cell::Bot));
}

#[test]
fn fork_masks_are_unique_up_to_rotation() {
    let forks = canonical_forks();
    assert_eq!(forks.len(), 22);
    for (i, a) in forks.iter().enumerate() {
        for b in &forks[i + 1..] {
            for turns in 0..4 {
                assert_ne!(a.rotated(turns), *b, "duplicate shapes:\n{a}\n\n{b}");
            }
        }
    }
}
