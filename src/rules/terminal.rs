//! End-of-game detection for Reversi
//!
//! The game ends when neither player has a legal move (a full board is the
//! common case). The winner is whoever holds more discs.

use crate::board::{Board, Player, Pos, TOTAL_CELLS};

use super::moves::is_legal_move;

/// Check whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    if board.is_full() {
        return false;
    }
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .any(|pos| is_legal_move(board, pos, player))
}

/// Check if neither side can move.
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() || (!has_legal_move(board, Player::One) && !has_legal_move(board, Player::Two))
}

/// Player with more discs, `None` on a tie.
///
/// Only meaningful once `is_game_over` holds, but computed for any board.
pub fn winner(board: &Board) -> Option<Player> {
    let one = board.count(Player::One);
    let two = board.count(Player::Two);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => Some(Player::One),
        std::cmp::Ordering::Less => Some(Player::Two),
        std::cmp::Ordering::Equal => None,
    }
}
