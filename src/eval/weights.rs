//! Positional weights for Reversi evaluation
//!
//! Corners are the only cells that can never be flipped back, so they carry
//! the largest weight. The X- and C-squares next to an empty corner hand the
//! corner to the opponent and are penalized.

use crate::board::{Pos, BOARD_SIZE};

/// Score constants
pub struct Score;

impl Score {
    /// Magnitude of a decided game. Far above any positional total
    /// (the table sums to well under 1_000 in absolute value).
    pub const WIN: i32 = 100_000;

    /// Alpha-beta bound; above `WIN` plus any disc margin
    pub const INF: i32 = Self::WIN * 10;
}

/// Classic corner/edge/danger weighting, row-major
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20,  20,   5,   5,  20, -20, 120],
    [-20, -40,  -5,  -5,  -5,  -5, -40, -20],
    [ 20,  -5,  15,   3,   3,  15,  -5,  20],
    [  5,  -5,   3,   3,   3,   3,  -5,   5],
    [  5,  -5,   3,   3,   3,   3,  -5,   5],
    [ 20,  -5,  15,   3,   3,  15,  -5,  20],
    [-20, -40,  -5,  -5,  -5,  -5, -40, -20],
    [120, -20,  20,   5,   5,  20, -20, 120],
];

/// Weight of one cell
#[inline]
pub fn weight(pos: Pos) -> i32 {
    POSITION_WEIGHTS[pos.row as usize][pos.col as usize]
}
