//! Rule-based noughts and crosses engine
//!
//! This crate provides:
//! - Board model with text codec and quarter-turn symmetry helpers
//! - Line, fork and positional detectors
//! - A priority-ordered move selector with a seeded random fallback
//! - An exhaustive explorer that plays every opponent reply path

pub mod app;
pub mod cli;
pub mod error;
pub mod explorer;
pub mod strategy;
pub mod tictactoe;

pub use app::EngineConfig;
pub use error::{Error, Result};
pub use explorer::{ExplorationReport, Explorer};
pub use strategy::{Choice, Heuristic, MoveSelector};
