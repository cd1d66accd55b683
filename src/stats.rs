//! Counters collected while a strategy searches.

use serde::{Deserialize, Serialize};

/// Statistics of the most recent search.
///
/// Reset at the start of every `suggest_move` or `score` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States handed to the recursive scorer: the root's children for `suggest_move`, the state
    /// itself for `score`.
    pub nodes_visited: u64,

    /// Scores answered from the transposition cache.
    pub cache_hits: u64,

    /// Sibling lists abandoned early by a bound or by a confirmed win.
    pub cutoffs: u64,

    /// Deepest recursion level reached. The first states handed to the scorer sit at level 0.
    pub max_depth: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Counts one visited state at the given recursion level.
    pub(crate) fn visit(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Fraction of visits answered by the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes_visited as f64
        }
    }
}
