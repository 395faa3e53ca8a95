//! Fork masks, fork detection and fork blocking
//!
//! A fork mask describes one double threat: three *mark* cells and the two
//! *open* cells their lines run through. A player holding two of the mark
//! cells, with the third mark cell and both open cells still unplayed, can
//! create two threats at once by taking the missing mark cell.

use std::{fmt, sync::OnceLock};

use crate::tictactoe::{Board, Cell, Coord, Player, apply_rotated, winning_move, winning_moves};

/// Role of a cell within a fork mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskCell {
    Ignored,
    /// Must be unplayed: one of the two cells the fork threatens to complete
    Open,
    Mark,
}

/// One double-threat shape in a fixed orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForkMask {
    cells: [[MaskCell; 3]; 3],
}

impl ForkMask {
    fn from_placement(marks: &[Coord; 3], open: [Coord; 2]) -> Self {
        let mut cells = [[MaskCell::Ignored; 3]; 3];
        for coord in marks {
            cells[usize::from(coord.row)][usize::from(coord.col)] = MaskCell::Mark;
        }
        for coord in open {
            cells[usize::from(coord.row)][usize::from(coord.col)] = MaskCell::Open;
        }
        ForkMask { cells }
    }

    pub fn get(&self, coord: Coord) -> MaskCell {
        self.cells[usize::from(coord.row)][usize::from(coord.col)]
    }

    fn coords_with(&self, role: MaskCell) -> impl Iterator<Item = Coord> + '_ {
        Board::coords().filter(move |&c| self.get(c) == role)
    }

    /// Mark cells in row-major order
    pub fn marks(&self) -> Vec<Coord> {
        self.coords_with(MaskCell::Mark).collect()
    }

    pub fn open_cells(&self) -> Vec<Coord> {
        self.coords_with(MaskCell::Open).collect()
    }

    /// The same mask turned counter-clockwise by `turns` quarter turns
    #[must_use = "rotated returns a new mask; the original is unchanged"]
    pub fn rotated(&self, turns: u8) -> ForkMask {
        let mut cells = [[MaskCell::Ignored; 3]; 3];
        for coord in Board::coords() {
            let target = coord.rotated(turns);
            cells[usize::from(target.row)][usize::from(target.col)] = self.get(coord);
        }
        ForkMask { cells }
    }

    pub fn is_rotation_of(&self, other: &ForkMask) -> bool {
        (0..4).any(|turns| self.rotated(turns) == *other)
    }

    /// The cell completing this fork for `player`, if the board matches the mask
    pub fn completion(&self, player: Player, board: &Board) -> Option<Coord> {
        if !self.coords_with(MaskCell::Open).all(|c| board.is_unplayed(c)) {
            return None;
        }
        let marks = self.marks();
        let owned = marks
            .iter()
            .filter(|&&c| board.get(c) == player.cell())
            .count();
        let unplayed: Vec<Coord> = marks
            .iter()
            .copied()
            .filter(|&c| board.is_unplayed(c))
            .collect();
        match unplayed.as_slice() {
            [missing] if owned == 2 => Some(*missing),
            _ => None,
        }
    }
}

impl fmt::Display for ForkMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                let c = match cell {
                    MaskCell::Ignored => '.',
                    MaskCell::Open => '_',
                    MaskCell::Mark => '#',
                };
                write!(f, "{c}")?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Every 3-cell placement, in lexicographic order of row-major indices
fn three_cell_placements() -> impl Iterator<Item = [Coord; 3]> {
    (0..9).flat_map(|a| {
        (a + 1..9).flat_map(move |b| {
            (b + 1..9).map(move |c| [Coord::from_index(a), Coord::from_index(b), Coord::from_index(c)])
        })
    })
}

fn board_with(marks: &[Coord]) -> Board {
    marks
        .iter()
        .fold(Board::new(), |board, &c| board.with_mark(c, Cell::Bot))
}

/// A fork needs a quiet predecessor: some two of the three marks must have
/// made at most `threats - 2` threats before the third mark was played.
fn has_quiet_predecessor(marks: &[Coord; 3], threats: usize) -> bool {
    [(0, 1), (0, 2), (1, 2)].iter().any(|&(i, j)| {
        let pair = board_with(&[marks[i], marks[j]]);
        winning_moves(Player::Bot, &pair).len() + 2 <= threats
    })
}

fn generate_forks() -> Vec<ForkMask> {
    let mut forks: Vec<ForkMask> = Vec::new();
    for marks in three_cell_placements() {
        let threats = winning_moves(Player::Bot, &board_with(&marks));
        if threats.len() < 2 || !has_quiet_predecessor(&marks, threats.len()) {
            continue;
        }
        for (i, &first) in threats.iter().enumerate() {
            for &second in &threats[i + 1..] {
                let mask = ForkMask::from_placement(&marks, [first, second]);
                if !forks.iter().any(|known| mask.is_rotation_of(known)) {
                    forks.push(mask);
                }
            }
        }
    }
    forks
}

/// The canonical fork masks, one per shape up to rotation.
///
/// Generated on first use and shared afterwards.
pub fn canonical_forks() -> &'static [ForkMask] {
    static FORKS: OnceLock<Vec<ForkMask>> = OnceLock::new();
    FORKS.get_or_init(generate_forks)
}

fn mask_completions(player: Player, board: &Board) -> Vec<Coord> {
    canonical_forks()
        .iter()
        .filter_map(|mask| mask.completion(player, board))
        .collect()
}

/// All cells where `player` could create a fork, with repeats, scanning the
/// masks over the board in each of the four orientations.
pub fn fork_moves(player: Player, board: &Board) -> Vec<Coord> {
    (0..4)
        .flat_map(|turns| apply_rotated(|b: &Board| mask_completions(player, b), board, turns))
        .collect()
}

/// Fork detector: the first cell that creates a fork for `player`
pub fn fork_move(player: Player, board: &Board) -> Option<Coord> {
    fork_moves(player, board).first().copied()
}

/// Response to an opponent who can fork on their next move.
///
/// Returns `None` when the opponent has no fork. Otherwise, in order:
/// 1. the first unplayed cell that creates a bot threat whose completing
///    cell is not one of the opponent's fork cells (the opponent is forced to
///    block somewhere harmless);
/// 2. the first opponent fork cell that leaves the opponent no fork once the
///    bot occupies it;
/// 3. the opponent's first fork cell.
pub fn block_fork(board: &Board) -> Option<Coord> {
    let threatened = fork_moves(Player::Opponent, board);
    let first = *threatened.first()?;

    let forcing = board.unplayed().into_iter().find(|&cell| {
        winning_move(Player::Bot, &board.with_mark(cell, Cell::Bot))
            .is_some_and(|reply| !threatened.contains(&reply))
    });
    if forcing.is_some() {
        return forcing;
    }

    threatened
        .iter()
        .copied()
        .find(|&cell| fork_moves(Player::Opponent, &board.with_mark(cell, Cell::Bot)).is_empty())
        .or(Some(first))
}
