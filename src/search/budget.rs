//! Node-count and wall-clock limits for a single move search

use std::time::{Duration, Instant};

/// Remaining allowance for one search call.
#[derive(Debug, Clone)]
pub struct Budget {
    nodes_left: usize,
    deadline: Option<Instant>,
    exhausted: bool,
}

impl Budget {
    /// `time_limit` of zero means no deadline.
    pub fn new(nodes: usize, time_limit: Duration) -> Self {
        let deadline = if time_limit.is_zero() {
            None
        } else {
            Some(Instant::now() + time_limit)
        };
        Self {
            nodes_left: nodes,
            deadline,
            exhausted: false,
        }
    }

    /// No limits at all
    pub fn unlimited() -> Self {
        Self::new(usize::MAX, Duration::ZERO)
    }

    /// Check whether more work may be done. Once false, stays false.
    #[inline]
    pub fn allows(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.nodes_left == 0 || self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.exhausted = true;
        }
        !self.exhausted
    }

    #[inline]
    pub fn spend(&mut self, nodes: usize) {
        self.nodes_left = self.nodes_left.saturating_sub(nodes);
    }

    /// Whether a limit was hit during the search
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
