//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Disc flipping along the 8 directions
//! - Move legality and state transitions
//! - End-of-game detection

pub mod flip;
pub mod moves;
pub mod terminal;

// Re-exports for convenient access
pub use flip::{flips, flips_in_direction, has_flip};
pub use moves::{apply_move, is_legal_move, legal_moves, legal_moves_for, pass, MoveError};
pub use terminal::{has_legal_move, is_game_over, winner};
