//! Persistent search tree carried across turns
//!
//! Every node owns its children outright (no parent links, no sharing), so
//! re-rooting is just moving one child out of the old root and dropping the
//! rest. Each node is scored once, when it is created; the alpha-beta pass
//! only reads those scores.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Player, Pos};
//! use reversi::search::{Budget, SearchTree};
//! use reversi::GameState;
//!
//! let state = GameState::initial();
//! let mut tree = SearchTree::build(state, Player::One, 2, &mut Budget::unlimited()).unwrap();
//! assert_eq!(tree.root().children.len(), 4);
//!
//! // Play (2,3) and keep the matching subtree
//! assert!(tree.reroot(Some(Pos::new(2, 3))));
//! assert_eq!(tree.root().turn, Player::Two);
//! ```

use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::eval::{positional_score, terminal_score};
use crate::rules::{is_game_over, MoveError};
use crate::state::GameState;

use super::Budget;

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Static score from the tree owner's perspective, fixed at creation
    pub score: i32,
    /// Side to move at this node
    pub turn: Player,
    /// Board snapshot
    pub board: Board,
    /// Move that led here from the parent; `None` for the root or a pass
    pub mv: Option<Pos>,
    /// Neither side can move
    pub terminal: bool,
    /// Children in legal-move (row-major) order. Empty until expanded.
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    /// Create and score a node.
    pub fn new(state: GameState, mv: Option<Pos>, perspective: Player) -> Self {
        let terminal = is_game_over(&state.board);
        let score = if terminal {
            terminal_score(&state.board, perspective)
        } else {
            positional_score(&state.board, perspective)
        };
        Self {
            score,
            turn: state.turn,
            board: state.board,
            mv,
            terminal,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> GameState {
        GameState::new(self.board, self.turn)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth along the leftmost child chain
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let Some(first) = node.children.first() {
            depth += 1;
            node = first;
        }
        depth
    }

    /// Number of nodes in this subtree, including `self`
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::size).sum::<usize>()
    }

    /// Create one child per legal move, or a single pass child when the side
    /// to move is blocked. Returns the number of children added.
    fn expand(&mut self, perspective: Player) -> Result<usize, MoveError> {
        if self.terminal || !self.children.is_empty() {
            return Ok(0);
        }

        let state = self.state();
        let moves = state.legal_moves();
        if moves.is_empty() {
            // Not terminal, so the opponent can move
            self.children
                .push(SearchNode::new(state.pass(), None, perspective));
            return Ok(1);
        }

        self.children.reserve_exact(moves.len());
        for mv in moves {
            let next = state.apply_move(mv)?;
            self.children.push(SearchNode::new(next, Some(mv), perspective));
        }
        Ok(self.children.len())
    }

    /// Expand unexpanded leaves down to `remaining` plies below `self`.
    ///
    /// Nodes are expanded whole; when the budget runs out the remaining
    /// leaves keep their static scores.
    fn grow(
        &mut self,
        remaining: u8,
        perspective: Player,
        budget: &mut Budget,
    ) -> Result<usize, MoveError> {
        if remaining == 0 || self.terminal {
            return Ok(0);
        }

        let mut added = 0;
        if self.children.is_empty() {
            if !budget.allows() {
                return Ok(0);
            }
            added = self.expand(perspective)?;
            budget.spend(added);
        }

        for child in &mut self.children {
            added += child.grow(remaining - 1, perspective, budget)?;
        }
        Ok(added)
    }
}

/// Outcome of aligning the tree with an observed game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The root already is the observed state
    Current,
    /// The root moved down to the child matching the observed move
    Advanced(Option<Pos>),
    /// No child matches; the tree is stale
    Desync,
}

/// Search tree rooted at the current game state.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: SearchNode,
    perspective: Player,
}

impl SearchTree {
    /// Build a fresh tree `depth` plies deep.
    ///
    /// The root is always expanded, even with an exhausted budget.
    pub fn build(
        state: GameState,
        perspective: Player,
        depth: u8,
        budget: &mut Budget,
    ) -> Result<Self, MoveError> {
        let mut tree = Self {
            root: SearchNode::new(state, None, perspective),
            perspective,
        };
        tree.extend(depth, budget)?;
        Ok(tree)
    }

    #[inline]
    pub fn root(&self) -> &SearchNode {
        &self.root
    }

    /// Player whose scores the tree holds
    #[inline]
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Depth along the leftmost chain
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total node count
    #[inline]
    pub fn node_count(&self) -> usize {
        self.root.size()
    }

    /// Deepen every leaf so the tree reaches `depth` plies again.
    /// Returns the number of nodes added.
    pub fn extend(&mut self, depth: u8, budget: &mut Budget) -> Result<usize, MoveError> {
        let mut added = 0;
        if self.root.children.is_empty() {
            added = self.root.expand(self.perspective)?;
            budget.spend(added);
        }

        if self.depth() >= depth as usize {
            return Ok(added);
        }

        for child in &mut self.root.children {
            added += child.grow(depth.saturating_sub(1), self.perspective, budget)?;
        }
        trace!(added, depth, "extended search tree");
        Ok(added)
    }

    /// Promote the root's child reached by `mv` (`None` = pass) and drop its
    /// siblings. Returns false, leaving the tree untouched, if no child matches.
    pub fn reroot(&mut self, mv: Option<Pos>) -> bool {
        let Some(idx) = self.root.children.iter().position(|c| c.mv == mv) else {
            return false;
        };
        let child = self.root.children.swap_remove(idx);
        self.root = child;
        true
    }

    /// Align the root with `state`, the position after the opponent's reply.
    ///
    /// The reply is read off the board delta: one newly filled cell is a
    /// move, an unchanged board with the turn handed over is a pass.
    pub fn sync(&mut self, state: &GameState) -> SyncOutcome {
        if self.root.state() == *state {
            return SyncOutcome::Current;
        }

        let mv = if self.root.board == state.board && self.root.turn != state.turn {
            None
        } else {
            match self.root.board.placed_between(&state.board) {
                Some(pos) => Some(pos),
                None => return SyncOutcome::Desync,
            }
        };

        let matches = self
            .root
            .children
            .iter()
            .any(|c| c.mv == mv && c.state() == *state);
        if !matches {
            return SyncOutcome::Desync;
        }

        self.reroot(mv);
        SyncOutcome::Advanced(mv)
    }
}
