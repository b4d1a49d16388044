//! Game state: a board snapshot plus the side to move

use crate::board::{Board, Player, Pos};
use crate::rules::{self, MoveError};

/// Immutable game state.
///
/// Transitions return a new `GameState`; the board is copied, never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
}

impl GameState {
    #[inline]
    pub fn new(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Standard opening position with player one to move
    pub fn initial() -> Self {
        Self::new(Board::initial(), Player::One)
    }

    /// Legal moves for the side to move, row-major
    #[inline]
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(self)
    }

    /// Successor state after `pos`
    #[inline]
    pub fn apply_move(&self, pos: Pos) -> Result<GameState, MoveError> {
        rules::apply_move(self, pos)
    }

    /// Same board, other side to move
    #[inline]
    pub fn pass(&self) -> GameState {
        rules::pass(self)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
