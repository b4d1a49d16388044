//! Search module for Reversi AI
//!
//! Contains:
//! - Persistent search tree, re-rooted between turns
//! - Minimax with alpha-beta pruning over the tree
//! - On-the-fly alpha-beta search without a tree
//! - Node and wall-clock budgets

pub mod alphabeta;
pub mod budget;
pub mod searcher;
pub mod tree;

pub use alphabeta::{alpha_beta, minimax, select_best, RootChoice, SearchStats, INF};
pub use budget::Budget;
pub use searcher::{SearchResult, Searcher};
pub use tree::{SearchNode, SearchTree, SyncOutcome};
