//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: position {position} is already occupied")]
    IllegalMove { position: u8 },

    #[error("position {value} is out of bounds (must be 1-9)")]
    InvalidPosition { value: usize },

    #[error("'{input}' is not a board position (expected a number 1-9)")]
    ParsePosition { input: String },

    #[error("invalid player '{input}' (expected 'bot' or 'opponent')")]
    InvalidPlayer { input: String },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("game already over")]
    GameOver,

    #[error("it is not the {player}'s turn")]
    OutOfTurn { player: crate::tictactoe::Player },

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
