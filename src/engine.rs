//! Main AI agent integrating the search components
//!
//! The agent owns the persistent search tree between turns. Each call to
//! `select_move`:
//!
//! 1. **Sync**: re-roots the remembered tree on the opponent's reply, or
//!    rebuilds it when the reply cannot be matched
//! 2. **Extend**: deepens the leaves back to the search depth for this turn
//! 3. **Select**: backs up values with alpha-beta and picks the root child
//! 4. **Advance**: moves the root to the chosen child for the next turn
//!
//! With `use_tree` off the agent searches each position from scratch instead.
//!
//! # Example
//!
//! ```
//! use reversi::{Agent, EngineConfig, GameState};
//!
//! let mut agent = Agent::with_config(EngineConfig::default().with_fixed_depth(2));
//! let state = GameState::initial();
//!
//! let result = agent.select_move_with_stats(&state).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Player, Pos};
use crate::config::EngineConfig;
use crate::rules::MoveError;
use crate::search::{select_best, Budget, SearchStats, SearchTree, Searcher, SyncOutcome};
use crate::state::GameState;

/// Errors from move selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The side to move must pass; the caller hands over the turn
    #[error("player {} has no legal move", .0.number())]
    NoLegalMove(Player),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// How the searched tree was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Remembered tree matched the position and was extended
    TreeReused,
    /// Tree built from scratch (first move or desync)
    TreeRebuilt,
    /// On-the-fly search, no tree kept
    Direct,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found
    pub best_move: Pos,
    /// Backed-up value of the move from the mover's perspective
    pub score: i32,
    /// How the search tree was obtained
    pub search_type: SearchType,
    /// Plies searched below the root
    pub depth: u8,
    /// Nodes visited by the backup pass
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Whether the node or time budget ran out
    pub budget_exhausted: bool,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Reversi playing agent.
///
/// Holds the configuration and, in tree mode, the search tree remembered
/// from the previous turn. One agent plays one side of one game; call
/// `reset` before reusing it for a new game.
#[derive(Debug)]
pub struct Agent {
    config: EngineConfig,
    tree: Option<SearchTree>,
    searcher: Searcher,
}

impl Agent {
    /// Create an agent with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            tree: None,
            searcher: Searcher::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Remembered tree, rooted at the position after the agent's last move
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    /// Drop the remembered tree.
    pub fn reset(&mut self) {
        self.tree = None;
    }

    /// Get the best move for the side to move in `state`.
    ///
    /// Convenience wrapper over `select_move_with_stats`.
    pub fn select_move(&mut self, state: &GameState) -> Result<Pos, SearchError> {
        self.select_move_with_stats(state).map(|r| r.best_move)
    }

    /// Get the best move with detailed search statistics.
    ///
    /// Fails with `SearchError::NoLegalMove` when the side to move has to
    /// pass.
    pub fn select_move_with_stats(&mut self, state: &GameState) -> Result<MoveResult, SearchError> {
        let start = Instant::now();

        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMove(state.turn));
        }

        let depth = self.config.depth_for(legal.len());
        let mut budget = Budget::new(
            self.config.node_budget,
            Duration::from_millis(self.config.time_limit_ms),
        );

        let result = if self.config.use_tree {
            self.search_tree(state, depth, &mut budget)?
        } else {
            self.search_direct(state, depth, &mut budget)?
        };

        let (best_move, score, search_type, stats) = result;
        let time_ms = start.elapsed().as_millis() as u64;
        info!(
            player = state.turn.number(),
            %best_move,
            score,
            depth,
            nodes = stats.nodes,
            time_ms,
            "selected move"
        );

        Ok(MoveResult {
            best_move,
            score,
            search_type,
            depth,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
            budget_exhausted: budget.is_exhausted(),
            time_ms,
        })
    }

    fn search_tree(
        &mut self,
        state: &GameState,
        depth: u8,
        budget: &mut Budget,
    ) -> Result<(Pos, i32, SearchType, SearchStats), SearchError> {
        let perspective = state.turn;

        let reused = match self.tree.as_mut() {
            Some(tree) if tree.perspective() == perspective => match tree.sync(state) {
                SyncOutcome::Current | SyncOutcome::Advanced(_) => true,
                SyncOutcome::Desync => {
                    debug!("opponent reply not in tree, rebuilding");
                    false
                }
            },
            _ => false,
        };

        let mut tree = match self.tree.take() {
            Some(mut tree) if reused => {
                let added = tree.extend(depth, budget)?;
                debug!(added, nodes = tree.node_count(), "re-rooted search tree");
                tree
            }
            _ => {
                let tree = SearchTree::build(*state, perspective, depth, budget)?;
                debug!(nodes = tree.node_count(), depth, "built search tree");
                tree
            }
        };

        if budget.is_exhausted() {
            debug!("search budget exhausted, leaves left at static scores");
        }

        let mut stats = SearchStats::default();
        let choice = select_best(tree.root(), perspective, true, &mut stats);
        let Some((best_move, score)) = choice.and_then(|c| c.mv.map(|mv| (mv, c.score))) else {
            return Err(SearchError::NoLegalMove(perspective));
        };

        tree.reroot(Some(best_move));
        self.tree = Some(tree);

        let search_type = if reused {
            SearchType::TreeReused
        } else {
            SearchType::TreeRebuilt
        };
        Ok((best_move, score, search_type, stats))
    }

    fn search_direct(
        &mut self,
        state: &GameState,
        depth: u8,
        budget: &mut Budget,
    ) -> Result<(Pos, i32, SearchType, SearchStats), SearchError> {
        self.tree = None;
        let result = self.searcher.search(state, depth, budget)?;
        let best_move = result
            .best_move
            .ok_or(SearchError::NoLegalMove(state.turn))?;
        Ok((best_move, result.score, SearchType::Direct, result.stats))
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    const OPENING: [Pos; 4] = [
        Pos { row: 2, col: 3 },
        Pos { row: 3, col: 2 },
        Pos { row: 4, col: 5 },
        Pos { row: 5, col: 4 },
    ];

    fn agent(depth: u8) -> Agent {
        Agent::with_config(EngineConfig::for_testing().with_fixed_depth(depth))
    }

    #[test]
    fn test_agent_creation() {
        let agent = Agent::new();
        assert!(agent.tree().is_none());
        assert_eq!(agent.config(), &EngineConfig::default());
    }

    #[test]
    fn test_opening_depth_one() {
        let mut agent = agent(1);
        let mv = agent.select_move(&GameState::initial()).unwrap();
        assert!(OPENING.contains(&mv));
        assert_eq!(mv, Pos::new(2, 3));
    }

    #[test]
    fn test_opening_direct_mode() {
        let mut agent = Agent::with_config(
            EngineConfig::for_testing()
                .with_fixed_depth(1)
                .with_tree(false),
        );
        let result = agent.select_move_with_stats(&GameState::initial()).unwrap();
        assert!(OPENING.contains(&result.best_move));
        assert_eq!(result.search_type, SearchType::Direct);
        assert!(agent.tree().is_none());
    }

    #[test]
    fn test_no_legal_move() {
        let board: Board = "
            12......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let mut agent = agent(2);
        let err = agent
            .select_move(&GameState::new(board, Player::Two))
            .unwrap_err();
        assert_eq!(err, SearchError::NoLegalMove(Player::Two));
    }

    #[test]
    fn test_tree_advances_to_own_move() {
        let mut agent = agent(3);
        let state = GameState::initial();
        let mv = agent.select_move(&state).unwrap();

        let tree = agent.tree().unwrap();
        assert_eq!(tree.root().state(), state.apply_move(mv).unwrap());
        assert_eq!(tree.perspective(), Player::One);
    }

    #[test]
    fn test_tree_reused_after_reply() {
        let mut agent = agent(3);
        let s0 = GameState::initial();
        let first = agent.select_move_with_stats(&s0).unwrap();
        assert_eq!(first.search_type, SearchType::TreeRebuilt);

        let ours = s0.apply_move(first.best_move).unwrap();
        let reply = ours.legal_moves()[0];
        let s1 = ours.apply_move(reply).unwrap();

        let second = agent.select_move_with_stats(&s1).unwrap();
        assert_eq!(second.search_type, SearchType::TreeReused);
        assert!(s1.legal_moves().contains(&second.best_move));
    }

    #[test]
    fn test_reused_tree_matches_fresh_search() {
        let s0 = GameState::initial();
        let mut cached = agent(3);
        let mv = cached.select_move(&s0).unwrap();
        let ours = s0.apply_move(mv).unwrap();
        let s1 = ours.apply_move(ours.legal_moves()[1]).unwrap();

        let mut fresh = agent(3);
        let a = cached.select_move_with_stats(&s1).unwrap();
        let b = fresh.select_move_with_stats(&s1).unwrap();
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(b.search_type, SearchType::TreeRebuilt);
    }

    #[test]
    fn test_desync_rebuilds() {
        let mut agent = agent(2);
        let s0 = GameState::initial();
        agent.select_move(&s0).unwrap();

        // A position the tree never saw
        let unrelated = GameState::new(Board::initial(), Player::One)
            .apply_move(Pos::new(5, 4))
            .unwrap()
            .apply_move(Pos::new(5, 3))
            .unwrap();
        let result = agent.select_move_with_stats(&unrelated).unwrap();
        assert_eq!(result.search_type, SearchType::TreeRebuilt);
    }

    #[test]
    fn test_reset_clears_tree() {
        let mut agent = agent(2);
        agent.select_move(&GameState::initial()).unwrap();
        assert!(agent.tree().is_some());
        agent.reset();
        assert!(agent.tree().is_none());
    }

    #[test]
    fn test_tree_and_direct_agree() {
        let mut state = GameState::initial();
        let mut tree_agent = agent(3);
        let mut direct_agent =
            Agent::with_config(EngineConfig::for_testing().with_fixed_depth(3).with_tree(false));

        for _ in 0..6 {
            let a = tree_agent.select_move_with_stats(&state).unwrap();
            let b = direct_agent.select_move_with_stats(&state).unwrap();
            assert_eq!(a.best_move, b.best_move);
            assert_eq!(a.score, b.score);
            state = state.apply_move(a.best_move).unwrap();
        }
    }

    #[test]
    fn test_self_play_finishes() {
        let mut one = agent(2);
        let mut two = agent(2);
        let mut state = GameState::initial();
        let mut plies = 0;

        while !state.is_game_over() {
            let agent = match state.turn {
                Player::One => &mut one,
                Player::Two => &mut two,
            };
            state = match agent.select_move(&state) {
                Ok(mv) => state.apply_move(mv).unwrap(),
                Err(SearchError::NoLegalMove(_)) => state.pass(),
                Err(e) => panic!("unexpected error: {e}"),
            };
            plies += 1;
            assert!(plies < 200);
        }
        assert!(state.board.disc_count() <= 64);
    }
}
