//! Disc flipping for Reversi
//!
//! Flip pattern along one direction: P-O-O-...-O-P where P is the mover's
//! disc (the first one at the placed cell) and O are opponent discs. A run
//! that reaches an empty cell or the edge before a closing P flips nothing.

use crate::board::{Bitboard, Board, Player, Pos, DIRECTIONS};

/// Discs that would be flipped in a single direction if `player` placed at `pos`.
///
/// The whole run is scanned before anything is reported, so an unclosed run
/// yields an empty set.
pub fn flips_in_direction(board: &Board, pos: Pos, player: Player, dr: i8, dc: i8) -> Bitboard {
    let opponent = player.opponent();
    let mut run = Bitboard::new();
    let mut cursor = pos.step(dr, dc);

    while let Some(p) = cursor {
        match board.get(p).player() {
            Some(owner) if owner == opponent => {
                run.set(p);
                cursor = p.step(dr, dc);
            }
            Some(_) => return run,
            None => return Bitboard::new(),
        }
    }

    // Ran off the edge without a closing disc
    Bitboard::new()
}

/// All discs flipped by `player` placing at `pos`, across the 8 directions.
///
/// Does not check that `pos` is empty; see `is_legal_move`.
pub fn flips(board: &Board, pos: Pos, player: Player) -> Bitboard {
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(dr, dc)| {
            acc.union(flips_in_direction(board, pos, player, dr, dc))
        })
}

/// Check whether `player` placing at `pos` flips anything.
///
/// Stops at the first qualifying direction.
#[inline]
pub fn has_flip(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| !flips_in_direction(board, pos, player, dr, dc).is_empty())
}
