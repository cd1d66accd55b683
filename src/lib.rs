//! Game-tree search strategies for two-player, zero-sum, perfect-information games.
//!
//! This library provides four minimax variants behind one [`Strategy`](strategy::Strategy) trait:
//! plain exhaustive negamax, negamax with a transposition cache, depth-bounded ("myopic")
//! negamax with a heuristic at the horizon, and negamax with alpha-beta pruning. A random
//! baseline is included as well. The game itself is supplied by implementing [`GameState`].
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::TicTacToeState;
//! use minimax_lib::strategy::{PrunedMinimaxStrategy, Strategy};
//! use minimax_lib::GameState;
//!
//! // X has two in a row and is to move
//! let board = TicTacToeState::default()
//!     .apply_move(&0)
//!     .apply_move(&3)
//!     .apply_move(&1)
//!     .apply_move(&4);
//!
//! let mut strategy = PrunedMinimaxStrategy::new();
//! let best_move = strategy.suggest_move(&board).unwrap();
//!
//! assert_eq!(best_move, 2);
//! ```
//!
//! Strategies can also be picked at run time:
//!
//! ```rust
//! use minimax_lib::boards::tippy::TippyState;
//! use minimax_lib::config::{SearchConfig, StrategyKind};
//! use minimax_lib::session::Match;
//! use minimax_lib::strategy::build_strategy;
//!
//! let config = SearchConfig::default().with_myopic_depth(2);
//! let mut game = Match::new(
//!     TippyState::default(),
//!     build_strategy(StrategyKind::Myopic, &config),
//!     build_strategy(StrategyKind::Myopic, &config),
//! );
//! let winner = game.play_out().unwrap();
//! println!("winner: {:?} after {} moves", winner, game.history().len());
//! ```

/// Contains pre-made implementations of the `GameState` trait.
pub mod boards;
/// Strategy selection and tuning.
pub mod config;
/// Error types.
pub mod error;
/// Contains the `GameState` trait and the score scale that define the interface for a game.
pub mod game_state;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Plays games between two strategies.
pub mod session;
/// Search counters.
pub mod stats;
/// The core module of the library, containing the search strategies.
pub mod strategy;

pub use config::{SearchConfig, StrategyKind};
pub use error::{MoveError, SearchError};
pub use game_state::{DRAW, GameOutcome, GameState, LOSE, Player, Score, WIN};
pub use stats::SearchStats;
pub use strategy::{
    MemoizedMinimaxStrategy, MinimaxStrategy, MyopicMinimaxStrategy, PrunedMinimaxStrategy,
    RandomStrategy, Strategy, build_strategy,
};
