//! Contains pre-made implementations of the `GameState` trait for small grid games.

use crate::game_state::{Player, Score};

/// A `GameState` implementation for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;
/// A `GameState` implementation for Tippy, a connection game on an n x n grid.
pub mod tippy;

/// The symbol a player writes on the grid.
pub(crate) fn mark(player: Player) -> char {
    match player {
        Player::One => 'X',
        Player::Two => 'O',
    }
}

/// Parses one grid cell. `'.'`, `' '` and `'_'` are empty.
pub(crate) fn parse_mark(c: char) -> Option<Option<Player>> {
    match c {
        'X' | 'x' => Some(Some(Player::One)),
        'O' | 'o' => Some(Some(Player::Two)),
        '.' | ' ' | '_' => Some(None),
        _ => None,
    }
}

/// Scales immediate threat counts into `[LOSE, WIN]`.
///
/// `wins` counts the mover's moves that win on the spot, `losses` the opponent's. With no
/// threats on either side the estimate is neutral.
pub(crate) fn threat_balance(wins: usize, losses: usize) -> Score {
    if wins + losses == 0 {
        0.0
    } else {
        2.0 * wins as f64 / (wins + losses) as f64 - 1.0
    }
}
