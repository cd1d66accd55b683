//! Cross-strategy tests on the bundled boards.

use minimax_lib::boards::tic_tac_toe::TicTacToeState;
use minimax_lib::boards::tippy::{TippyMove, TippyState};
use minimax_lib::{
    GameOutcome, GameState, MemoizedMinimaxStrategy, MinimaxStrategy, MyopicMinimaxStrategy,
    Player, PrunedMinimaxStrategy, Score, SearchConfig, SearchError, Strategy, StrategyKind,
    build_strategy,
};
use proptest::prelude::*;
use proptest::sample::Index;

const SEARCH_KINDS: [StrategyKind; 4] = [
    StrategyKind::Exhaustive,
    StrategyKind::Memoized,
    StrategyKind::Myopic,
    StrategyKind::Pruned,
];

/// Plays the given picks from `state`, stopping early if the game ends.
fn play_prefix<S: GameState>(mut state: S, picks: &[Index]) -> S {
    for pick in picks {
        if state.is_over() {
            break;
        }
        let moves = state.possible_next_moves();
        state = state.apply_move(&moves[pick.index(moves.len())]);
    }
    state
}

// =============================================================================
// Preconditions
// =============================================================================

/// A broken game that claims to be running but offers no moves.
#[derive(Clone)]
struct Stuck;

impl GameState for Stuck {
    type Move = u8;
    type Key = ();

    fn next_player(&self) -> Player {
        Player::One
    }

    fn possible_next_moves(&self) -> Vec<u8> {
        Vec::new()
    }

    fn apply_move(&self, _: &u8) -> Self {
        Stuck
    }

    fn outcome(&self) -> GameOutcome {
        GameOutcome::InProgress
    }

    fn rough_outcome(&self) -> Score {
        0.0
    }

    fn canonical_key(&self) -> Self::Key {}
}

#[test]
fn test_no_legal_moves_is_reported() {
    let config = SearchConfig::default().with_random_seed(3);
    for kind in StrategyKind::ALL {
        let mut strategy = build_strategy::<Stuck>(kind, &config);
        assert_eq!(strategy.suggest_move(&Stuck), Err(SearchError::NoLegalMoves));
    }
}

#[test]
fn test_finished_tippy_is_reported() {
    let won = TippyState::from_rows(&["XX.", ".XX", "OO."], Player::Two).unwrap();
    for kind in StrategyKind::ALL {
        let mut strategy = build_strategy::<TippyState>(kind, &SearchConfig::default());
        assert_eq!(strategy.suggest_move(&won), Err(SearchError::GameOver));
    }
}

// =============================================================================
// Terminal Short-Circuit
// =============================================================================

#[test]
fn test_every_search_takes_the_winning_move() {
    let ttt = TicTacToeState::from_rows(&["XX.", "OO.", "..."], Player::One).unwrap();
    let tippy = TippyState::from_rows(&["XX.", "OX.", "OO."], Player::One).unwrap();

    for kind in SEARCH_KINDS {
        let config = SearchConfig::default();
        let mut for_ttt = build_strategy::<TicTacToeState>(kind, &config);
        let mut for_tippy = build_strategy::<TippyState>(kind, &config);
        assert_eq!(for_ttt.suggest_move(&ttt), Ok(2), "{kind:?}");
        assert_eq!(
            for_tippy.suggest_move(&tippy),
            Ok(TippyMove::new(1, 2)),
            "{kind:?}"
        );
    }
}

#[test]
fn test_exact_searches_find_the_tippy_opening() {
    let board = TippyState::default();
    for kind in StrategyKind::ALL.into_iter().filter(|k| k.is_exact()) {
        let mut strategy = build_strategy::<TippyState>(kind, &SearchConfig::default());
        assert_eq!(strategy.suggest_move(&board), Ok(TippyMove::new(1, 1)), "{kind:?}");
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_equal_states_get_equal_moves() {
    let played = TippyState::default()
        .apply_move(&TippyMove::new(0, 0))
        .apply_move(&TippyMove::new(1, 1));
    let parsed = TippyState::from_rows(&["X..", ".O.", "..."], Player::One).unwrap();
    assert_eq!(played, parsed);

    let config = SearchConfig::default().with_random_seed(99);
    for kind in StrategyKind::ALL {
        let a = build_strategy::<TippyState>(kind, &config).suggest_move(&played);
        let b = build_strategy::<TippyState>(kind, &config).suggest_move(&parsed);
        assert_eq!(a, b, "{kind:?}");
    }
}

// =============================================================================
// Cache Transparency
// =============================================================================

#[test]
fn test_repeated_memoized_calls_match_a_fresh_instance() {
    let board = TippyState::default().apply_move(&TippyMove::new(0, 1));

    let mut reused = MemoizedMinimaxStrategy::new();
    let first = reused.suggest_move(&board).unwrap();
    let second = reused.suggest_move(&board).unwrap();
    let fresh = MemoizedMinimaxStrategy::new().suggest_move(&board).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, fresh);
    assert_eq!(first, MinimaxStrategy::new().suggest_move(&board).unwrap());
}

#[test]
fn test_cache_from_another_game_is_not_consulted() {
    // arrange
    let mut strategy = MemoizedMinimaxStrategy::new();
    let old_game = TippyState::default().apply_move(&TippyMove::new(2, 2));
    strategy.suggest_move(&old_game).unwrap();
    let probe = old_game.apply_move(&TippyMove::new(0, 0));
    assert!(strategy.cached_score(&probe).is_some());

    // act
    Strategy::<TippyState>::reset(&mut strategy);

    // assert
    assert_eq!(strategy.cached_score(&probe), None);
    let new_game = TippyState::new(4);
    assert_eq!(strategy.cached_score(&new_game), None);
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_pruning_visits_fewer_states_on_the_empty_board() {
    let board = TicTacToeState::default();
    let mut pruned = PrunedMinimaxStrategy::new();
    let mut exhaustive = MinimaxStrategy::new();

    let pruned_move = pruned.suggest_move(&board).unwrap();
    let exhaustive_move = exhaustive.suggest_move(&board).unwrap();

    assert_eq!(pruned_move, exhaustive_move);
    assert!(pruned.stats().nodes_visited < exhaustive.stats().nodes_visited);
    // 549945 states follow the first move in a full tic-tac-toe tree.
    assert_eq!(exhaustive.stats().nodes_visited, 549_945);
}

// =============================================================================
// Myopic Bound
// =============================================================================

#[test]
fn test_myopic_at_depth_zero_is_the_heuristic() {
    let boards = [
        TippyState::from_rows(&["XX.", "OX.", "OO."], Player::One).unwrap(),
        TippyState::from_rows(&["XX.", "OX.", "O.."], Player::Two).unwrap(),
        TippyState::new(5),
    ];
    let mut strategy = MyopicMinimaxStrategy::new(0);
    for board in boards {
        assert_eq!(strategy.score(&board), board.rough_outcome());
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn exact_strategies_agree_on_tippy(picks in prop::collection::vec(any::<Index>(), 2..6)) {
        let state = play_prefix(TippyState::default(), &picks);
        prop_assume!(!state.is_over());

        let mut exhaustive = MinimaxStrategy::new();
        let mut memoized = MemoizedMinimaxStrategy::new();
        let mut pruned = PrunedMinimaxStrategy::new();

        let score = exhaustive.score(&state);
        prop_assert_eq!(memoized.score(&state), score);
        prop_assert_eq!(pruned.score(&state), score);

        let exhaustive_move = exhaustive.suggest_move(&state).unwrap();
        let exhaustive_nodes = exhaustive.stats().nodes_visited;
        let memoized_move = memoized.suggest_move(&state).unwrap();
        let pruned_move = pruned.suggest_move(&state).unwrap();

        prop_assert_eq!(&memoized_move, &exhaustive_move);
        prop_assert_eq!(-exhaustive.score(&state.apply_move(&pruned_move)), score);
        prop_assert!(pruned.stats().nodes_visited <= exhaustive_nodes);
    }

    #[test]
    fn exact_strategies_agree_on_tic_tac_toe(picks in prop::collection::vec(any::<Index>(), 1..6)) {
        let state = play_prefix(TicTacToeState::default(), &picks);
        prop_assume!(!state.is_over());

        let mut exhaustive = MinimaxStrategy::new();
        let mut pruned = PrunedMinimaxStrategy::new();

        let exhaustive_move = exhaustive.suggest_move(&state).unwrap();
        let exhaustive_nodes = exhaustive.stats().nodes_visited;
        let pruned_move = pruned.suggest_move(&state).unwrap();

        prop_assert_eq!(pruned_move, exhaustive_move);
        prop_assert!(pruned.stats().nodes_visited <= exhaustive_nodes);
        prop_assert_eq!(pruned.score(&state), exhaustive.score(&state));
    }

    #[test]
    fn score_is_the_best_negated_child(picks in prop::collection::vec(any::<Index>(), 2..6)) {
        let state = play_prefix(TippyState::default(), &picks);
        prop_assume!(!state.is_over());

        let mut exhaustive = MinimaxStrategy::new();
        let mut memoized = MemoizedMinimaxStrategy::new();
        let children: Vec<TippyState> = state
            .possible_next_moves()
            .iter()
            .map(|m| state.apply_move(m))
            .collect();

        let best_child = children
            .iter()
            .map(|c| -exhaustive.score(c))
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(exhaustive.score(&state), best_child);

        let best_cached_child = children
            .iter()
            .map(|c| -memoized.score(c))
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(memoized.score(&state), best_cached_child);
    }

    #[test]
    fn myopic_never_exceeds_its_depth(
        picks in prop::collection::vec(any::<Index>(), 0..4),
        depth in 0u32..4,
    ) {
        let state = play_prefix(TippyState::default(), &picks);
        prop_assume!(!state.is_over());

        let mut myopic = MyopicMinimaxStrategy::new(depth);
        let chosen = myopic.suggest_move(&state).unwrap();

        prop_assert!(state.possible_next_moves().contains(&chosen));
        prop_assert!(myopic.stats().max_depth <= depth);
        let score = myopic.score(&state);
        prop_assert!((-1.0..=1.0).contains(&score));
    }
}
