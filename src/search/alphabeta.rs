//! Minimax with alpha-beta pruning over a built search tree
//!
//! Values are backed up from the scores attached at tree-build time; nothing
//! is evaluated here. A node is a maximizing node when the tree owner is to
//! move there, so pass nodes keep the alternation right.
//!
//! # Example
//!
//! ```
//! use reversi::board::Player;
//! use reversi::search::{select_best, Budget, SearchStats, SearchTree};
//! use reversi::GameState;
//!
//! let tree = SearchTree::build(GameState::initial(), Player::One, 3, &mut Budget::unlimited()).unwrap();
//! let mut stats = SearchStats::default();
//! let choice = select_best(tree.root(), tree.perspective(), true, &mut stats).unwrap();
//! println!("play {:?} (score {})", choice.mv, choice.score);
//! ```

use crate::board::{Player, Pos};
use crate::eval::Score;

use super::SearchNode;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = Score::INF;

/// Counters collected during a backup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose value was read or backed up
    pub nodes: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
}

/// The root child picked by `select_best`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootChoice {
    /// Index into the root's children
    pub index: usize,
    /// Move leading to that child (`None` for a pass)
    pub mv: Option<Pos>,
    /// Backed-up value
    pub score: i32,
}

/// Alpha-beta value of `node` for `perspective`.
pub fn alpha_beta(
    node: &SearchNode,
    perspective: Player,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if node.is_leaf() {
        return node.score;
    }

    if node.turn == perspective {
        let mut best = -INF;
        for child in &node.children {
            best = best.max(alpha_beta(child, perspective, alpha, beta, stats));
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for child in &node.children {
            best = best.min(alpha_beta(child, perspective, alpha, beta, stats));
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Exhaustive minimax value of `node`, no pruning.
pub fn minimax(node: &SearchNode, perspective: Player, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if node.is_leaf() {
        return node.score;
    }

    let values = node
        .children
        .iter()
        .map(|child| minimax(child, perspective, stats));
    if node.turn == perspective {
        values.fold(-INF, i32::max)
    } else {
        values.fold(INF, i32::min)
    }
}

/// Pick the best child of `root` for `perspective`.
///
/// Children are tried in generation order and only a strictly better value
/// replaces the current choice, so ties go to the earliest row-major move.
/// With `pruning` off every child is searched exhaustively; both modes pick
/// the same child.
pub fn select_best(
    root: &SearchNode,
    perspective: Player,
    pruning: bool,
    stats: &mut SearchStats,
) -> Option<RootChoice> {
    stats.nodes += 1;

    let mut best: Option<RootChoice> = None;
    let mut alpha = -INF;
    let beta = INF;

    for (index, child) in root.children.iter().enumerate() {
        let score = if pruning {
            alpha_beta(child, perspective, alpha, beta, stats)
        } else {
            minimax(child, perspective, stats)
        };

        if best.map_or(true, |b| score > b.score) {
            best = Some(RootChoice {
                index,
                mv: child.mv,
                score,
            });
        }
        alpha = alpha.max(score);
    }

    best
}
