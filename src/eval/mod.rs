//! Evaluation module for Reversi AI
//!
//! Contains:
//! - Positional weight table and score constants
//! - Static evaluation with terminal detection

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, positional_score, terminal_score};
pub use weights::{weight, Score, POSITION_WEIGHTS};
