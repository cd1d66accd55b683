use crate::config::StrategyKind;
use crate::error::SearchError;
use crate::game_state::{GameState, LOSE, Score};
use crate::stats::SearchStats;
use crate::strategy::{Strategy, first_best, legal_root_moves};
use tracing::{debug, instrument};

/// Exhaustive negamax.
///
/// Scores every reachable position with no pruning and no memory. Exponential in the number of
/// remaining plies, so only usable on small games, but it is the reference the other strategies
/// are checked against.
#[derive(Debug, Default, Clone)]
pub struct MinimaxStrategy {
    stats: SearchStats,
}

impl MinimaxStrategy {
    /// Creates the strategy with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the exact score of `state` for the player to move in it.
    pub fn score<S: GameState>(&mut self, state: &S) -> Score {
        self.stats.reset();
        self.result(state, 0)
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn result<S: GameState>(&mut self, state: &S, depth: u32) -> Score {
        self.stats.visit(depth);
        if state.is_over() {
            return state.outcome().score();
        }

        let mut best = LOSE;
        for m in state.possible_next_moves() {
            let score = -self.result(&state.apply_move(&m), depth + 1);
            best = best.max(score);
        }
        best
    }
}

impl<S: GameState> Strategy<S> for MinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Exhaustive
    }

    #[instrument(level = "debug", skip_all, fields(strategy = "exhaustive"))]
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let moves = legal_root_moves(state)?;
        self.stats.reset();

        let (best, score) = first_best(moves, |m| -self.result(&state.apply_move(m), 0))
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(?best, score, nodes = self.stats.nodes_visited, "suggested move");
        Ok(best)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
