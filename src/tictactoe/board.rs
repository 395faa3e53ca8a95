//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Unplayed,
    Opponent,
    Bot,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Unplayed => '.',
            Cell::Opponent => 'O',
            Cell::Bot => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Unplayed),
            'O' | 'o' => Some(Cell::Opponent),
            'B' | 'b' => Some(Cell::Bot),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Unplayed => None,
            Cell::Opponent => Some(Player::Opponent),
            Cell::Bot => Some(Player::Bot),
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Opponent,
    Bot,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Opponent => Player::Bot,
            Player::Bot => Player::Opponent,
        }
    }

    /// Convert player to cell
    pub fn cell(self) -> Cell {
        match self {
            Player::Opponent => Cell::Opponent,
            Player::Bot => Cell::Bot,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Opponent => write!(f, "opponent"),
            Player::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bot" | "b" | "engine" => Ok(Player::Bot),
            "opponent" | "o" | "human" | "you" => Ok(Player::Opponent),
            _ => Err(crate::Error::InvalidPlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// A 0-based (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const CENTER: Coord = Coord::new(1, 1);

    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Inverse of [`Coord::index`]; `index` must be below 9
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 9);
        Coord::new((index / 3) as u8, (index % 3) as u8)
    }

    /// The user-facing 1-based position of this coordinate
    pub fn position(self) -> Position {
        Position(self.index() as u8 + 1)
    }

    pub fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A user-facing board position, numbered 1-9 left to right, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position(u8);

impl Position {
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Create a position, rejecting values outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Coord, Position};
    ///
    /// let position = Position::new(6).unwrap();
    /// assert_eq!(position.coord(), Coord::new(1, 2));
    /// assert!(Position::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if (1..=9).contains(&value) {
            Ok(Position(value as u8))
        } else {
            Err(crate::Error::InvalidPosition { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Row = (position - 1) div 3, column = (position - 1) mod 3
    pub fn coord(self) -> Coord {
        Coord::from_index(usize::from(self.0 - 1))
    }
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Self {
        coord.position()
    }
}

impl From<Position> for Coord {
    fn from(position: Position) -> Self {
        position.coord()
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        usize::from(position.0)
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| crate::Error::ParsePosition {
            input: s.trim().to_string(),
        })?;
        Position::new(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// A 3x3 grid of cells
///
/// Every cell holds exactly one [`Cell`] value at all times. The board is
/// `Copy` so detectors can place hypothetical marks on a scratch copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board::default()
    }

    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[usize::from(coord.row)][usize::from(coord.col)]
    }

    pub fn is_unplayed(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Unplayed
    }

    pub fn main_diagonal(&self) -> [Cell; 3] {
        [self.cells[0][0], self.cells[1][1], self.cells[2][2]]
    }

    /// All coordinates in row-major order
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..9).map(Coord::from_index)
    }

    /// Coordinates holding the given cell value, in row-major order
    pub fn coords_with(&self, cell: Cell) -> Vec<Coord> {
        Self::coords().filter(|&c| self.get(c) == cell).collect()
    }

    /// Unplayed coordinates in row-major order
    pub fn unplayed(&self) -> Vec<Coord> {
        self.coords_with(Cell::Unplayed)
    }

    pub fn unplayed_positions(&self) -> Vec<Position> {
        self.unplayed().into_iter().map(Coord::position).collect()
    }

    pub fn marks(&self, player: Player) -> Vec<Coord> {
        self.coords_with(player.cell())
    }

    pub fn has_mark(&self, player: Player) -> bool {
        self.cells.iter().flatten().any(|&c| c == player.cell())
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().flatten().any(|&c| c == Cell::Unplayed)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Unplayed)
            .count()
    }

    /// Copy of the board with `cell` written at `coord`, occupied or not.
    ///
    /// Used for hypothetical placements; real moves go through [`Board::apply_move`].
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, coord: Coord, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[usize::from(coord.row)][usize::from(coord.col)] = cell;
        next
    }

    /// Apply a move and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the target cell is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell, Player, Position};
    ///
    /// let center = Position::new(5).unwrap();
    /// let board = Board::new().apply_move(center, Player::Opponent).unwrap();
    /// assert_eq!(board.get(center.coord()), Cell::Opponent);
    /// assert!(board.apply_move(center, Player::Bot).is_err());
    /// ```
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, position: Position, player: Player) -> crate::Result<Board> {
        let coord = position.coord();
        if !self.is_unplayed(coord) {
            return Err(crate::Error::IllegalMove {
                position: position.get(),
            });
        }
        Ok(self.with_mark(coord, player.cell()))
    }

    /// Parse a board from nine cell characters.
    ///
    /// `.` is unplayed, `B` the bot and `O` the opponent. Whitespace and the
    /// row separators `|` and `/` are ignored, so `"B.. / .O. / ..."` works.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not describe exactly nine cells or
    /// contains an unknown character.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / 3][i % 3] = cell;
        }
        Ok(board)
    }

    /// Compact nine-character encoding accepted by [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
