use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A position score from the perspective of the player about to move.
///
/// Exact strategies only ever produce [`WIN`], [`DRAW`] or [`LOSE`]. Heuristic
/// estimates may land anywhere in between.
pub type Score = f64;

/// The player to move can force a win.
pub const WIN: Score = 1.0;
/// Neither player can force a win.
pub const DRAW: Score = 0.0;
/// The player to move cannot avoid a loss.
pub const LOSE: Score = -1.0;

/// The central trait of the library, defining the interface for a game state.
///
/// To search a custom game, this trait must be implemented. States are values: applying a move
/// never changes `self`, it produces a successor.
pub trait GameState: Clone {
    /// The type representing a move in the game. This could be a simple `u8` for a board position
    /// or a coordinate pair.
    type Move: Clone + PartialEq + Debug;

    /// Canonical identity of a position. Logically identical states (same board, same mover)
    /// must produce equal keys.
    type Key: Eq + Hash;

    /// Returns the player whose turn it is to make a move.
    fn next_player(&self) -> Player;

    /// Returns all legal moves from this state, in a stable order.
    ///
    /// The order matters: strategies break ties by picking the first best move. The list is empty
    /// iff the game is over.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// Returns the state reached by playing `game_move`.
    ///
    /// Only moves returned by [`possible_next_moves`](GameState::possible_next_moves) may be
    /// applied; anything else is up to the implementation.
    fn apply_move(&self, game_move: &Self::Move) -> Self;

    /// Returns the outcome of the game from the perspective of [`next_player`](GameState::next_player).
    fn outcome(&self) -> GameOutcome;

    /// Returns `true` iff the game has ended in this state.
    fn is_over(&self) -> bool {
        self.outcome() != GameOutcome::InProgress
    }

    /// Returns a cheap estimate in `[LOSE, WIN]` of how favourable this state is for the player
    /// to move, computed without searching the game tree.
    fn rough_outcome(&self) -> Score;

    /// Returns the canonical key of this state.
    fn canonical_key(&self) -> Self::Key;
}

/// Represents the possible outcomes of a game, relative to the player to move.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress = 0,
    /// The player to move has won.
    Win = 1,
    /// The player to move has lost.
    Lose = 2,
    /// The game has ended in a draw.
    Draw = 3,
}

impl GameOutcome {
    /// Maps a finished game onto the score scale.
    ///
    /// # Panics
    ///
    /// Panics on [`GameOutcome::InProgress`]: an unfinished game has no outcome score.
    pub fn score(self) -> Score {
        match self {
            GameOutcome::Win => WIN,
            GameOutcome::Draw => DRAW,
            GameOutcome::Lose => LOSE,
            GameOutcome::InProgress => panic!("BUG: scoring a game that is still in progress"),
        }
    }

    /// The same outcome seen by the other player.
    pub fn flip(self) -> Self {
        match self {
            GameOutcome::Win => GameOutcome::Lose,
            GameOutcome::Lose => GameOutcome::Win,
            other => other,
        }
    }
}

/// The two seats of a game.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves first.
    One = 1,
    /// The player who moves second.
    Two = 2,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
