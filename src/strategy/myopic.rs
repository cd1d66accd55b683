use crate::config::{DEFAULT_MYOPIC_DEPTH, SearchConfig, StrategyKind};
use crate::error::SearchError;
use crate::game_state::{GameState, LOSE, Score};
use crate::stats::SearchStats;
use crate::strategy::{Strategy, first_best, legal_root_moves};
use tracing::{debug, instrument};

/// Depth-bounded negamax.
///
/// Searches like [`MinimaxStrategy`](crate::strategy::MinimaxStrategy) but stops `depth` plies
/// below the root's children and falls back to [`GameState::rough_outcome`] there. Work is
/// bounded by `branching ^ depth`, at the price of optimality. Scores are only as good as the
/// heuristic and may fall anywhere in `[LOSE, WIN]`.
#[derive(Debug, Clone)]
pub struct MyopicMinimaxStrategy {
    depth: u32,
    stats: SearchStats,
}

impl Default for MyopicMinimaxStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MYOPIC_DEPTH)
    }
}

impl MyopicMinimaxStrategy {
    /// Creates a strategy that searches `depth` levels below each root move.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }

    /// Creates a strategy using the configured myopic depth.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.myopic_depth)
    }

    /// The depth budget handed to each of the root's children.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Scores `state` with the configured depth budget.
    pub fn score<S: GameState>(&mut self, state: &S) -> Score {
        self.score_to_depth(state, self.depth)
    }

    /// Scores `state`, expanding at most `depth` plies below it.
    ///
    /// With `depth == 0` a non-terminal state gets exactly its `rough_outcome`.
    pub fn score_to_depth<S: GameState>(&mut self, state: &S, depth: u32) -> Score {
        self.stats.reset();
        self.minimax(state, depth, 0)
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn minimax<S: GameState>(&mut self, state: &S, remaining: u32, level: u32) -> Score {
        self.stats.visit(level);
        if state.is_over() {
            return state.outcome().score();
        }
        if remaining == 0 {
            return state.rough_outcome();
        }

        let mut best = LOSE;
        for m in state.possible_next_moves() {
            best = best.max(-self.minimax(&state.apply_move(&m), remaining - 1, level + 1));
        }
        best
    }
}

impl<S: GameState> Strategy<S> for MyopicMinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Myopic
    }

    #[instrument(level = "debug", skip_all, fields(strategy = "myopic", depth = self.depth))]
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let moves = legal_root_moves(state)?;
        self.stats.reset();

        let depth = self.depth;
        let (best, score) = first_best(moves, |m| -self.minimax(&state.apply_move(m), depth, 0))
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(
            ?best,
            score,
            nodes = self.stats.nodes_visited,
            deepest = self.stats.max_depth,
            "suggested move"
        );
        Ok(best)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
