use crate::config::StrategyKind;
use crate::error::SearchError;
use crate::game_state::{GameState, LOSE, Score};
use crate::stats::SearchStats;
use crate::strategy::{Strategy, first_best, legal_root_moves};
use rustc_hash::FxHashMap;
use tracing::{debug, instrument, trace};

/// Exhaustive negamax with a transposition cache.
///
/// Every scored position, terminal ones included, is stored under its canonical key, so a
/// position reachable by several move orders is expanded only once. The cache only saves work:
/// the chosen moves are exactly those of [`MinimaxStrategy`](crate::strategy::MinimaxStrategy).
///
/// The cache belongs to this instance and survives between calls within one game. Call
/// [`reset`](MemoizedMinimaxStrategy::reset) (or build a new instance) before an unrelated game.
pub struct MemoizedMinimaxStrategy<S: GameState> {
    cache: FxHashMap<S::Key, Score>,
    stats: SearchStats,
}

impl<S: GameState> Default for MemoizedMinimaxStrategy<S> {
    fn default() -> Self {
        Self {
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }
}

impl<S: GameState> MemoizedMinimaxStrategy<S> {
    /// Creates a strategy with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the cache.
    pub fn reset(&mut self) {
        trace!(entries = self.cache.len(), "clearing transposition cache");
        self.cache.clear();
        self.stats.reset();
    }

    /// Number of cached positions.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// The cached score of `state`, if it has been scored since the last reset.
    pub fn cached_score(&self, state: &S) -> Option<Score> {
        self.cache.get(&state.canonical_key()).copied()
    }

    /// Returns the exact score of `state` for the player to move in it.
    pub fn score(&mut self, state: &S) -> Score {
        self.stats.reset();
        self.minimax(state, 0)
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn minimax(&mut self, state: &S, depth: u32) -> Score {
        self.stats.visit(depth);
        let key = state.canonical_key();
        if let Some(&score) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return score;
        }

        let score = if state.is_over() {
            state.outcome().score()
        } else {
            let mut best = LOSE;
            for m in state.possible_next_moves() {
                best = best.max(-self.minimax(&state.apply_move(&m), depth + 1));
            }
            best
        };
        self.cache.insert(key, score);
        score
    }
}

impl<S: GameState> Strategy<S> for MemoizedMinimaxStrategy<S> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Memoized
    }

    #[instrument(level = "debug", skip_all, fields(strategy = "memoized"))]
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let moves = legal_root_moves(state)?;
        self.stats.reset();

        let (best, score) = first_best(moves, |m| -self.minimax(&state.apply_move(m), 0))
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(
            ?best,
            score,
            nodes = self.stats.nodes_visited,
            cache_hits = self.stats.cache_hits,
            cached = self.cache.len(),
            "suggested move"
        );
        Ok(best)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn reset(&mut self) {
        MemoizedMinimaxStrategy::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::tic_tac_toe::TicTacToeState;
    use crate::boards::tippy::{TippyMove, TippyState};
    use crate::game_state::{DRAW, Player, WIN};

    #[test]
    fn caches_every_scored_position() {
        // arrange
        let board = TicTacToeState::from_rows(&["XX.", "OO.", "..."], Player::One).unwrap();
        let mut strategy = MemoizedMinimaxStrategy::new();

        // act
        let chosen = strategy.suggest_move(&board).unwrap();

        // assert
        assert_eq!(chosen, 2);
        let winning = board.apply_move(&2);
        assert!(winning.is_over());
        assert_eq!(strategy.cached_score(&winning), Some(winning.outcome().score()));
        assert_eq!(strategy.cached_score(&board), None);
        assert!(strategy.cache_len() > 5);
    }

    #[test]
    fn transpositions_hit_the_cache() {
        let mut strategy = MemoizedMinimaxStrategy::new();

        assert_eq!(strategy.score(&TicTacToeState::default()), DRAW);
        // 5478 distinct positions are reachable in tic-tac-toe, far fewer than the visits.
        assert_eq!(strategy.cache_len(), 5478);
        assert!(strategy.stats().cache_hits > 0);
        assert_eq!(
            strategy.stats().nodes_visited,
            strategy.cache_len() as u64 + strategy.stats().cache_hits
        );
    }

    #[test]
    fn second_call_reuses_the_cache() {
        let board = TippyState::default().apply_move(&TippyMove::new(1, 1));
        let mut strategy = MemoizedMinimaxStrategy::new();

        let first = strategy.suggest_move(&board).unwrap();
        let first_visits = strategy.stats().nodes_visited;
        let second = strategy.suggest_move(&board).unwrap();

        assert_eq!(first, second);
        assert_eq!(strategy.stats().nodes_visited, 8);
        assert_eq!(strategy.stats().cache_hits, 8);
        assert!(first_visits > 8);
    }

    #[test]
    fn reset_forgets_previous_games() {
        // arrange
        let board = TippyState::default();
        let probe = board.apply_move(&TippyMove::new(1, 1));
        let mut strategy = MemoizedMinimaxStrategy::new();
        strategy.suggest_move(&board).unwrap();
        assert_eq!(strategy.cached_score(&probe), Some(-WIN));

        // act
        strategy.reset();

        // assert
        assert_eq!(strategy.cached_score(&probe), None);
        assert_eq!(strategy.cache_len(), 0);
        assert_eq!(MemoizedMinimaxStrategy::<TippyState>::new().cached_score(&probe), None);
    }
}
