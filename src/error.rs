//! Error types for strategy calls and checked move application.

use derive_more::{Display, Error};

/// Returned when a strategy is asked for a move it cannot give.
///
/// Both variants are caller mistakes: check [`GameState::is_over`](crate::GameState::is_over)
/// before asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The state passed in is terminal.
    #[display("cannot suggest a move: the game is over")]
    GameOver,
    /// The state passed in is not terminal but has no legal moves.
    #[display("cannot suggest a move: no legal moves")]
    NoLegalMoves,
}

/// Returned by the bundled boards when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// The target cell is not on the board.
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// No moves are accepted once the game has ended.
    #[display("the game is already over")]
    GameOver,
}
