use crate::boards::{mark, parse_mark, threat_balance};
use crate::error::MoveError;
use crate::game_state::{GameOutcome, GameState, Player, Score};
use std::fmt;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// An implementation of the `GameState` trait for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
/// A move is represented by a `u8` from 0 to 8, numbering cells row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicTacToeState {
    next_player: Player,
    field: [Option<Player>; 9],
    outcome: GameOutcome,
}

impl TicTacToeState {
    fn new(next_player: Player, field: [Option<Player>; 9]) -> Self {
        let mut state = Self {
            next_player,
            field,
            outcome: GameOutcome::InProgress,
        };
        state.outcome = state.compute_outcome();
        state
    }

    /// Builds a position from three rows of `X`, `O` and `.`.
    ///
    /// Returns `None` unless there are exactly three rows of three valid cells.
    pub fn from_rows(rows: &[&str], next_player: Player) -> Option<Self> {
        if rows.len() != 3 {
            return None;
        }
        let mut field = [None; 9];
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != 3 {
                return None;
            }
            for (c, &ch) in cells.iter().enumerate() {
                field[r * 3 + c] = parse_mark(ch)?;
            }
        }
        Some(Self::new(next_player, field))
    }

    /// Plays `cell`, rejecting occupied or unknown cells and finished games.
    pub fn try_apply_move(&self, cell: u8) -> Result<Self, MoveError> {
        let idx = cell as usize;
        let (row, col) = (idx / 3, idx % 3);
        if self.outcome != GameOutcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if idx >= 9 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.field[idx].is_some() {
            return Err(MoveError::Occupied { row, col });
        }
        Ok(self.apply_move(&cell))
    }

    /// Returns the mark in `cell`, if any.
    pub fn cell(&self, cell: u8) -> Option<Player> {
        self.field.get(cell as usize).copied().flatten()
    }

    /// Returns the player who completed a line, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.has_line(p))
    }

    fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.field[i] == Some(player)))
    }

    fn compute_outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(p) if p == self.next_player => GameOutcome::Win,
            Some(_) => GameOutcome::Lose,
            None if self.field.iter().all(|x| x.is_some()) => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
    }

    fn completes_line(&self, cell: usize, player: Player) -> bool {
        let mut field = self.field;
        field[cell] = Some(player);
        LINES
            .iter()
            .filter(|line| line.contains(&cell))
            .any(|line| line.iter().all(|&i| field[i] == Some(player)))
    }
}

impl Default for TicTacToeState {
    /// Creates an empty board with player 'X' to move.
    fn default() -> Self {
        TicTacToeState::new(Player::One, [None; 9])
    }
}

impl GameState for TicTacToeState {
    type Move = u8;
    type Key = u32;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn possible_next_moves(&self) -> Vec<Self::Move> {
        if self.outcome != GameOutcome::InProgress {
            return Vec::new();
        }

        self.empty_cells().map(|i| i as u8).collect()
    }

    fn apply_move(&self, game_move: &Self::Move) -> Self {
        let mut field = self.field;
        field[*game_move as usize] = Some(self.next_player);
        TicTacToeState::new(self.next_player.opponent(), field)
    }

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    fn rough_outcome(&self) -> Score {
        if self.outcome != GameOutcome::InProgress {
            return 0.0;
        }
        let me = self.next_player;
        let wins = self.empty_cells().filter(|&i| self.completes_line(i, me)).count();
        let losses = self
            .empty_cells()
            .filter(|&i| self.completes_line(i, me.opponent()))
            .count();
        threat_balance(wins, losses)
    }

    fn canonical_key(&self) -> Self::Key {
        let mut key = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            let cell_value = match cell {
                None => 0,
                Some(Player::One) => 1,
                Some(Player::Two) => 2,
            };
            key += cell_value * 3u32.pow(i as u32);
        }
        key * 2 + (self.next_player == Player::Two) as u32
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.field[row * 3 + col].map_or(' ', mark).to_string())
                .collect();
            writeln!(f, "{}", line.join("|"))?;
            if row < 2 {
                writeln!(f, "-----")?;
            }
        }
        write!(f, "Next to play: {}", mark(self.next_player))
    }
}
