//! Command-line interface for the noughts engine
//!
//! Interactive play, exhaustive exploration, single-board suggestions and a
//! listing of the fork masks.

pub mod commands;
pub mod output;
