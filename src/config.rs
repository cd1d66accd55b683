//! Strategy selection and tuning parameters.

use serde::{Deserialize, Serialize};

/// How many plies below the root's children the myopic strategy searches before falling back
/// to the heuristic.
pub const DEFAULT_MYOPIC_DEPTH: u32 = 5;

/// Search configuration shared by all strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth budget of [`MyopicMinimaxStrategy`](crate::strategy::myopic::MyopicMinimaxStrategy).
    pub myopic_depth: u32,

    /// Seed for [`RandomStrategy`](crate::strategy::random::RandomStrategy).
    /// `None` draws from the thread-local generator.
    pub random_seed: Option<i64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            myopic_depth: DEFAULT_MYOPIC_DEPTH,
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the myopic depth budget.
    pub fn with_myopic_depth(mut self, depth: u32) -> Self {
        self.myopic_depth = depth;
        self
    }

    /// Makes the random strategy deterministic.
    pub fn with_random_seed(mut self, seed: i64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

/// The available strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Full negamax over the whole game tree.
    Exhaustive,
    /// Negamax with a transposition cache.
    Memoized,
    /// Depth-bounded negamax with heuristic leaves.
    Myopic,
    /// Negamax with alpha-beta pruning.
    Pruned,
    /// Uniformly random legal moves.
    Random,
}

impl StrategyKind {
    /// Every kind, in declaration order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Exhaustive,
        StrategyKind::Memoized,
        StrategyKind::Myopic,
        StrategyKind::Pruned,
        StrategyKind::Random,
    ];

    /// Short lower-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Exhaustive => "exhaustive",
            StrategyKind::Memoized => "memoized",
            StrategyKind::Myopic => "myopic",
            StrategyKind::Pruned => "pruned",
            StrategyKind::Random => "random",
        }
    }

    /// Whether the strategy always finds a move of optimal score.
    pub fn is_exact(self) -> bool {
        matches!(
            self,
            StrategyKind::Exhaustive | StrategyKind::Memoized | StrategyKind::Pruned
        )
    }
}
