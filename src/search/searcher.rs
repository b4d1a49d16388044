//! Alpha-beta search over states generated on the fly
//!
//! Same backup rules as the tree driver, but successor states are created
//! during the recursion and dropped right after, so nothing survives the
//! call. Used when the persistent tree is turned off.
//!
//! # Example
//!
//! ```
//! use reversi::search::{Budget, Searcher};
//! use reversi::GameState;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&GameState::initial(), 3, &mut Budget::unlimited()).unwrap();
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Player, Pos};
use crate::eval::{positional_score, terminal_score};
use crate::rules::{is_game_over, MoveError};
use crate::state::GameState;

use super::alphabeta::INF;
use super::{Budget, SearchStats};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up value of the best move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Stateless alpha-beta searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies below `state` for the side to move.
    ///
    /// Returns a result with `best_move: None` when the side to move has no
    /// legal move. Root moves are tried in row-major order and only a
    /// strictly better value replaces the current best.
    pub fn search(
        &mut self,
        state: &GameState,
        depth: u8,
        budget: &mut Budget,
    ) -> Result<SearchResult, MoveError> {
        self.stats = SearchStats::default();
        let perspective = state.turn;

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mov in state.legal_moves() {
            let next = state.apply_move(mov)?;
            budget.spend(1);
            let score = self.alpha_beta(&next, perspective, depth.saturating_sub(1), alpha, beta, budget)?;

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
        }

        Ok(SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            stats: self.stats,
        })
    }

    fn alpha_beta(
        &mut self,
        state: &GameState,
        perspective: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        budget: &mut Budget,
    ) -> Result<i32, MoveError> {
        self.stats.nodes += 1;

        if is_game_over(&state.board) {
            return Ok(terminal_score(&state.board, perspective));
        }
        if depth == 0 || !budget.allows() {
            return Ok(positional_score(&state.board, perspective));
        }

        let moves = state.legal_moves();
        let children: Vec<GameState> = if moves.is_empty() {
            vec![state.pass()]
        } else {
            moves
                .into_iter()
                .map(|mov| state.apply_move(mov))
                .collect::<Result<_, _>>()?
        };
        budget.spend(children.len());

        let maximizing = state.turn == perspective;
        let mut best = if maximizing { -INF } else { INF };
        for child in &children {
            let value = self.alpha_beta(child, perspective, depth - 1, alpha, beta, budget)?;
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }

    /// Statistics from the last search
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
