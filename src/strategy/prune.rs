use crate::config::StrategyKind;
use crate::error::SearchError;
use crate::game_state::{DRAW, GameState, LOSE, Score, WIN};
use crate::stats::SearchStats;
use crate::strategy::{Strategy, legal_root_moves};
use tracing::{debug, instrument, trace};

/// Negamax with alpha-beta pruning.
///
/// The recursive scorer carries two bounds: `cur_min`, the score the root's mover is already
/// guaranteed, and `opp_min`, the score the opponent can already hold them to. Both are kept on
/// the root mover's scale, and `cur` says whose choice the current node is. A node stops
/// enumerating its moves as soon as the bounds cross, since the player choosing above it would
/// never let play reach it.
///
/// The root is handled separately: it scores its children one by one with the full window and
/// returns the first move that wins outright, without looking at the rest. Otherwise it takes
/// the first drawing move, and if every move loses, the first move.
#[derive(Debug, Default, Clone)]
pub struct PrunedMinimaxStrategy {
    stats: SearchStats,
}

impl PrunedMinimaxStrategy {
    /// Creates the strategy with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the exact score of `state` for the player to move in it.
    pub fn score<S: GameState>(&mut self, state: &S) -> Score {
        self.stats.reset();
        self.minimax(state, LOSE, WIN, true, 0)
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn minimax<S: GameState>(
        &mut self,
        state: &S,
        mut cur_min: Score,
        mut opp_min: Score,
        cur: bool,
        depth: u32,
    ) -> Score {
        self.stats.visit(depth);
        if state.is_over() {
            let outcome = state.outcome().score();
            return if cur { outcome } else { -outcome };
        }

        let moves = state.possible_next_moves();
        let last = moves.len().saturating_sub(1);
        if cur {
            let mut score = LOSE;
            for (i, m) in moves.iter().enumerate() {
                let child = self.minimax(&state.apply_move(m), cur_min, opp_min, false, depth + 1);
                score = score.max(child);
                cur_min = cur_min.max(score);
                if cur_min >= opp_min {
                    if i < last {
                        self.stats.cutoffs += 1;
                    }
                    break;
                }
            }
            score
        } else {
            let mut score = WIN;
            for (i, m) in moves.iter().enumerate() {
                let child = self.minimax(&state.apply_move(m), cur_min, opp_min, true, depth + 1);
                score = score.min(child);
                opp_min = opp_min.min(score);
                if opp_min <= cur_min {
                    if i < last {
                        self.stats.cutoffs += 1;
                    }
                    break;
                }
            }
            score
        }
    }
}

impl<S: GameState> Strategy<S> for PrunedMinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Pruned
    }

    #[instrument(level = "debug", skip_all, fields(strategy = "pruned"))]
    fn suggest_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let moves = legal_root_moves(state)?;
        self.stats.reset();

        let mut fallback: Option<&S::Move> = None;
        for (i, m) in moves.iter().enumerate() {
            let score = self.minimax(&state.apply_move(m), LOSE, WIN, false, 0);
            if score == WIN {
                if i + 1 < moves.len() {
                    self.stats.cutoffs += 1;
                    trace!(skipped = moves.len() - i - 1, "winning move found, skipping siblings");
                }
                debug!(best = ?m, score, nodes = self.stats.nodes_visited, "suggested move");
                return Ok(m.clone());
            }
            if score == DRAW && fallback.is_none() {
                fallback = Some(m);
            }
        }

        let best = fallback
            .or_else(|| moves.first())
            .cloned()
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(
            ?best,
            drawn = fallback.is_some(),
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "suggested move"
        );
        Ok(best)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
