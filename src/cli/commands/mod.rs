//! CLI subcommands

pub mod explore;
pub mod forks;
pub mod play;
pub mod suggest;
