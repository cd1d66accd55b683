//! The move-choosing strategies.
//!
//! Every strategy implements [`Strategy`]. The four minimax variants share the negamax
//! convention: a state is scored from the point of view of the player about to move in it, so a
//! parent's score for a move is the negation of the child's score.
//!
//! | Strategy | Exact | Cost |
//! |---|---|---|
//! | [`MinimaxStrategy`] | yes | whole game tree |
//! | [`MemoizedMinimaxStrategy`] | yes | each distinct position once, plus a cache |
//! | [`MyopicMinimaxStrategy`] | no | `branching ^ depth` |
//! | [`PrunedMinimaxStrategy`] | yes | a subset of the game tree |
//! | [`RandomStrategy`] | no | one move enumeration |

use crate::config::{SearchConfig, StrategyKind};
use crate::error::SearchError;
use crate::game_state::{GameState, Score};
use crate::random::{SeededRng, SystemRng};
use crate::stats::SearchStats;

/// Negamax with a transposition cache.
pub mod memoize;
/// Plain exhaustive negamax.
pub mod minimax;
/// Depth-bounded negamax with heuristic leaves.
pub mod myopic;
/// Negamax with alpha-beta pruning.
pub mod prune;
/// Uniformly random moves.
pub mod random;

pub use memoize::MemoizedMinimaxStrategy;
pub use minimax::MinimaxStrategy;
pub use myopic::MyopicMinimaxStrategy;
pub use prune::PrunedMinimaxStrategy;
pub use random::RandomStrategy;

/// Chooses a move for the player to act in a given state.
pub trait Strategy<S: GameState> {
    /// Which algorithm this is.
    fn kind(&self) -> StrategyKind;

    /// Returns a legal move for [`GameState::next_player`].
    ///
    /// The state must not be over and must have at least one legal move; otherwise a
    /// [`SearchError`] is returned and nothing is searched. The state itself is never modified.
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError>;

    /// Statistics of the most recent search.
    fn stats(&self) -> &SearchStats;

    /// Forgets everything learned from earlier games. Call before starting an unrelated game.
    fn reset(&mut self) {}
}

/// Builds a boxed strategy of the requested kind.
pub fn build_strategy<S>(kind: StrategyKind, config: &SearchConfig) -> Box<dyn Strategy<S>>
where
    S: GameState + 'static,
    S::Key: 'static,
{
    match kind {
        StrategyKind::Exhaustive => Box::new(MinimaxStrategy::new()),
        StrategyKind::Memoized => Box::new(MemoizedMinimaxStrategy::<S>::new()),
        StrategyKind::Myopic => Box::new(MyopicMinimaxStrategy::new(config.myopic_depth)),
        StrategyKind::Pruned => Box::new(PrunedMinimaxStrategy::new()),
        StrategyKind::Random => match config.random_seed {
            Some(seed) => Box::new(RandomStrategy::new(SeededRng::new(seed))),
            None => Box::new(RandomStrategy::new(SystemRng)),
        },
    }
}

/// Checks the shared precondition and returns the root's moves.
pub(crate) fn legal_root_moves<S: GameState>(state: &S) -> Result<Vec<S::Move>, SearchError> {
    if state.is_over() {
        return Err(SearchError::GameOver);
    }
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(moves)
}

/// Returns the first move with the highest score, or `None` for an empty list.
pub(crate) fn first_best<M, F>(moves: Vec<M>, mut score_of: F) -> Option<(M, Score)>
where
    F: FnMut(&M) -> Score,
{
    let mut best: Option<(M, Score)> = None;
    for m in moves {
        let score = score_of(&m);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((m, score)),
        }
    }
    best
}
