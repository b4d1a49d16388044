//! Reversi AI Engine
//!
//! A move-search agent for 8x8 Reversi (Othello):
//! - Bitboard board representation, one 64-bit set per player
//! - Move generation and flipping in all eight directions
//! - Positional evaluation with a classic square-weight table
//! - Minimax with alpha-beta pruning over a persistent search tree
//! - Tree reuse across turns: the subtree under the opponent's reply becomes
//!   the next root
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Game rules (legal moves, flipping, game end)
//! - [`state`]: Board plus side to move
//! - [`eval`]: Position evaluation
//! - [`search`]: Search tree, alpha-beta, budgets
//! - [`engine`]: The agent integrating all components
//! - [`config`]: Engine settings and TOML loading
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Agent, EngineConfig, GameState};
//!
//! let mut state = GameState::initial();
//! let mut agent = Agent::with_config(EngineConfig::default().with_fixed_depth(2));
//!
//! // Player one opens
//! let pos = agent.select_move(&state).unwrap();
//! state = state.apply_move(pos).unwrap();
//! println!("AI plays at {pos}");
//! println!("{}", state.board);
//! ```
//!
//! # Search Depth
//!
//! Unless a fixed depth is configured, the agent searches deeper as the
//! number of legal moves shrinks:
//! 1. Seven or more moves: 1 ply
//! 2. Four to six moves: 2 plies
//! 3. Two or three moves: 3 plies
//! 4. A single move: 4 plies
//!
//! The depth is always capped by `max_depth`, and node/time budgets can stop
//! tree growth early.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod state;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::{ConfigError, EngineConfig};
pub use engine::{Agent, MoveResult, SearchError, SearchType};
pub use state::GameState;
