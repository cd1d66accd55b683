use crate::config::StrategyKind;
use crate::error::SearchError;
use crate::game_state::GameState;
use crate::random::MoveRng;
use crate::stats::SearchStats;
use crate::strategy::{Strategy, legal_root_moves};
use tracing::{debug, instrument};

/// Picks a uniformly random legal move. Useful as a baseline opponent.
#[derive(Debug, Default, Clone)]
pub struct RandomStrategy<R: MoveRng> {
    rng: R,
    stats: SearchStats,
}

impl<R: MoveRng> RandomStrategy<R> {
    /// Creates a strategy that draws its moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }
}

impl<S: GameState, R: MoveRng> Strategy<S> for RandomStrategy<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    #[instrument(level = "debug", skip_all, fields(strategy = "random"))]
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let moves = legal_root_moves(state)?;
        self.stats.reset();

        let best = self
            .rng
            .pick(&moves)
            .cloned()
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(?best, options = moves.len(), "suggested move");
        Ok(best)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
