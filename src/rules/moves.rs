//! Move legality and state transitions

use thiserror::Error;

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::state::GameState;

use super::flip::{flips, has_flip};

/// Errors from applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move {pos} for player {}", player.number())]
    InvalidMove { pos: Pos, player: Player },
}

/// Check if `player` may place at `pos`: the cell is empty and at least one
/// direction brackets a run of opponent discs.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    pos.in_bounds() && board.is_empty(pos) && has_flip(board, pos, player)
}

/// Legal moves for `player` on `board`, in row-major order.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_legal_move(board, pos, player))
        .collect()
}

/// Legal moves for the side to move, in row-major order.
///
/// The order is part of the contract: search tie-breaks depend on it.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Pos> {
    legal_moves_for(&state.board, state.turn)
}

/// Apply a move and return the successor state.
///
/// The input state is untouched. The turn passes to the opponent even if the
/// opponent then has no legal move; pass handling belongs to the caller.
pub fn apply_move(state: &GameState, pos: Pos) -> Result<GameState, MoveError> {
    let player = state.turn;
    if !pos.in_bounds() || !state.board.is_empty(pos) {
        return Err(MoveError::InvalidMove { pos, player });
    }

    let flipped = flips(&state.board, pos, player);
    if flipped.is_empty() {
        return Err(MoveError::InvalidMove { pos, player });
    }

    let mut board = state.board;
    board.place(pos, player);
    for p in flipped.iter_ones() {
        board.place(p, player);
    }

    Ok(GameState::new(board, player.opponent()))
}

/// Hand the turn to the opponent without changing the board
#[inline]
pub fn pass(state: &GameState) -> GameState {
    GameState::new(state.board, state.turn.opponent())
}
