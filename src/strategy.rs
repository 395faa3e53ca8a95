//! Rule-ordered move selection: fork masks, positional heuristics and the selector

pub mod forks;
pub mod positional;
pub mod selector;

pub use forks::{ForkMask, MaskCell, block_fork, canonical_forks, fork_move, fork_moves};
pub use selector::{Choice, Heuristic, MoveSelector, best_heuristic_move};
