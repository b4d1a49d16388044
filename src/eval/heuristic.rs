//! Static evaluation of Reversi positions
//!
//! This module provides the evaluation function used at tree-build time.
//! It evaluates board positions based on:
//! - Terminal detection (neither side can move)
//! - Positional weights for non-terminal boards

use crate::board::{Board, Player};
use crate::rules::{is_game_over, winner};

use super::weights::{weight, Score};

/// Evaluate the board from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - Negative values indicate disadvantage for `player`
/// - `±(Score::WIN + margin)` for a finished game, 0 for a drawn one
///
/// Symmetric: `evaluate(b, p) == -evaluate(b, p.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    if is_game_over(board) {
        return terminal_score(board, player);
    }
    positional_score(board, player)
}

/// Weighted sum of `player`'s cells minus the opponent's.
#[must_use]
pub fn positional_score(board: &Board, player: Player) -> i32 {
    let mine: i32 = board.discs(player).iter_ones().map(weight).sum();
    let theirs: i32 = board.discs(player.opponent()).iter_ones().map(weight).sum();
    mine - theirs
}

/// Score of a finished game by disc count.
///
/// The disc margin is added on top of `Score::WIN` so a wider win ranks
/// above a narrow one; both stay far from any positional total.
#[must_use]
pub fn terminal_score(board: &Board, player: Player) -> i32 {
    let margin = board.count(player) as i32 - board.count(player.opponent()) as i32;
    match winner(board) {
        Some(w) if w == player => Score::WIN + margin,
        Some(_) => -Score::WIN + margin,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, TOTAL_CELLS};

    fn split_board(mine: usize) -> Board {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let player = if idx < mine { Player::One } else { Player::Two };
            board.place(Pos::from_index(idx), player);
        }
        board
    }

    #[test]
    fn test_opening_is_balanced() {
        let board = Board::initial();
        assert_eq!(evaluate(&board, Player::One), 0);
        assert_eq!(evaluate(&board, Player::Two), 0);
    }

    #[test]
    fn test_corner_is_valuable() {
        let mut board = Board::initial();
        board.place(Pos::new(0, 0), Player::One);
        assert!(positional_score(&board, Player::One) > 100);
        assert!(positional_score(&board, Player::Two) < -100);
    }

    #[test]
    fn test_symmetry() {
        let mut board = Board::initial();
        board.place(Pos::new(1, 1), Player::One);
        board.place(Pos::new(0, 7), Player::Two);
        assert_eq!(
            evaluate(&board, Player::One),
            -evaluate(&board, Player::Two)
        );
    }

    #[test]
    fn test_terminal_win_positive() {
        let board = split_board(40);
        let score = evaluate(&board, Player::One);
        assert!(score > 0);
        assert!(score >= Score::WIN);
    }

    #[test]
    fn test_terminal_loss_negative() {
        let board = split_board(24);
        let score = evaluate(&board, Player::One);
        assert!(score < 0);
        assert!(score <= -Score::WIN);
    }

    #[test]
    fn test_terminal_draw_zero() {
        let board = split_board(32);
        assert_eq!(evaluate(&board, Player::One), 0);
    }

    #[test]
    fn test_terminal_decided_by_disc_comparison() {
        // Neither side can move, board not full: 20 discs against 5
        let mut board = Board::new();
        for idx in 0..20 {
            board.place(Pos::from_index(idx), Player::One);
        }
        for idx in 59..TOTAL_CELLS {
            board.place(Pos::from_index(idx), Player::Two);
        }
        assert!(is_game_over(&board));
        assert!(!board.is_full());

        // Fewer than half the cells, still a win
        assert_eq!(evaluate(&board, Player::One), Score::WIN + 15);
        assert_eq!(evaluate(&board, Player::Two), -Score::WIN - 15);
    }

    #[test]
    fn test_wider_win_ranks_higher() {
        let wide = terminal_score(&split_board(50), Player::One);
        let narrow = terminal_score(&split_board(40), Player::One);
        assert!(wide > narrow);
    }

    #[test]
    fn test_terminal_dominates_positional() {
        // Player two owns every corner but loses on discs
        let mut board = split_board(40);
        for pos in [Pos::new(0, 0), Pos::new(0, 7), Pos::new(7, 0), Pos::new(7, 7)] {
            board.place(pos, Player::Two);
        }
        assert!(evaluate(&board, Player::Two) < 0);
    }
}
