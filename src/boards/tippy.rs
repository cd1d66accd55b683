use crate::boards::{mark, parse_mark, threat_balance};
use crate::error::MoveError;
use crate::game_state::{GameOutcome, GameState, Player, Score};
use std::fmt;

/// Smallest board on which a tippy fits.
pub const MIN_SIZE: usize = 3;

// Scanning from the top-left, a tippy anchored at its first cell can only take one of these four
// shapes. Offsets are (row, column) from the anchor.
const SHAPES: [[(isize, isize); 3]; 4] = [
    [(0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, -1)],
    [(1, 0), (1, 1), (2, 1)],
    [(1, 0), (1, -1), (2, -1)],
];

/// A move in Tippy: the zero-based cell to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TippyMove {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl TippyMove {
    /// Creates a move at a zero-based cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TippyMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row: {}  Column: {}", self.row + 1, self.col + 1)
    }
}

/// Canonical identity of a Tippy position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TippyKey {
    next_player: Player,
    cells: Vec<Option<Player>>,
}

/// An implementation of the `GameState` trait for Tippy.
///
/// Players take turns marking empty cells of an n x n grid. The first to own four cells forming a
/// "tippy" (an S or Z tetromino, in any orientation) wins; a full grid without one is a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TippyState {
    size: usize,
    next_player: Player,
    cells: Vec<Option<Player>>,
    outcome: GameOutcome,
}

impl TippyState {
    /// Creates an empty `size` x `size` board with player 'X' to move.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`MIN_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "a tippy board needs at least {MIN_SIZE} rows, got {size}");
        Self::with_cells(size, Player::One, vec![None; size * size])
    }

    fn with_cells(size: usize, next_player: Player, cells: Vec<Option<Player>>) -> Self {
        let mut state = Self {
            size,
            next_player,
            cells,
            outcome: GameOutcome::InProgress,
        };
        state.outcome = state.compute_outcome();
        state
    }

    /// Builds a position from square rows of `X`, `O` and `.`.
    ///
    /// Returns `None` if the rows do not form a square of at least [`MIN_SIZE`] or contain other
    /// characters.
    pub fn from_rows(rows: &[&str], next_player: Player) -> Option<Self> {
        let size = rows.len();
        if size < MIN_SIZE {
            return None;
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let parsed: Option<Vec<Option<Player>>> = row.chars().map(parse_mark).collect();
            let parsed = parsed?;
            if parsed.len() != size {
                return None;
            }
            cells.extend(parsed);
        }
        Some(Self::with_cells(size, next_player, cells))
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the mark at a zero-based cell, or `None` when empty or off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Plays `game_move`, rejecting occupied or off-board cells and finished games.
    pub fn try_apply_move(&self, game_move: TippyMove) -> Result<Self, MoveError> {
        let TippyMove { row, col } = game_move;
        if self.outcome != GameOutcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.cells[row * self.size + col].is_some() {
            return Err(MoveError::Occupied { row, col });
        }
        Ok(self.apply_move(&game_move))
    }

    /// Returns `true` if `player` owns a tippy anywhere on the board.
    pub fn has_tippy(&self, player: Player) -> bool {
        Self::find_tippy(self.size, &self.cells, player)
    }

    /// Returns the player owning a tippy, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.has_tippy(p))
    }

    fn find_tippy(size: usize, cells: &[Option<Player>], player: Player) -> bool {
        let owns = |row: isize, col: isize| {
            row >= 0
                && col >= 0
                && (row as usize) < size
                && (col as usize) < size
                && cells[row as usize * size + col as usize] == Some(player)
        };

        (0..size as isize).any(|x| {
            (0..size as isize).any(|y| {
                owns(x, y)
                    && SHAPES
                        .iter()
                        .any(|shape| shape.iter().all(|&(dx, dy)| owns(x + dx, y + dy)))
            })
        })
    }

    fn compute_outcome(&self) -> GameOutcome {
        match self.winner() {
            Some(p) if p == self.next_player => GameOutcome::Win,
            Some(_) => GameOutcome::Lose,
            None if self.cells.iter().all(|c| c.is_some()) => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    fn wins_by_marking(&self, idx: usize, player: Player) -> bool {
        let mut cells = self.cells.clone();
        cells[idx] = Some(player);
        Self::find_tippy(self.size, &cells, player)
    }

    fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }
}

impl Default for TippyState {
    /// Creates an empty 3 x 3 board with player 'X' to move.
    fn default() -> Self {
        TippyState::new(MIN_SIZE)
    }
}

impl GameState for TippyState {
    type Move = TippyMove;
    type Key = TippyKey;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn possible_next_moves(&self) -> Vec<Self::Move> {
        if self.outcome != GameOutcome::InProgress {
            return Vec::new();
        }

        self.empty_cells()
            .map(|i| TippyMove::new(i / self.size, i % self.size))
            .collect()
    }

    fn apply_move(&self, game_move: &Self::Move) -> Self {
        let mut cells = self.cells.clone();
        cells[game_move.row * self.size + game_move.col] = Some(self.next_player);
        TippyState::with_cells(self.size, self.next_player.opponent(), cells)
    }

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    fn rough_outcome(&self) -> Score {
        if self.outcome != GameOutcome::InProgress {
            return 0.0;
        }
        let me = self.next_player;
        let wins = self.empty_cells().filter(|&i| self.wins_by_marking(i, me)).count();
        let losses = self
            .empty_cells()
            .filter(|&i| self.wins_by_marking(i, me.opponent()))
            .count();
        threat_balance(wins, losses)
    }

    fn canonical_key(&self) -> Self::Key {
        TippyKey {
            next_player: self.next_player,
            cells: self.cells.clone(),
        }
    }
}

impl fmt::Display for TippyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current board:")?;
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| self.cells[row * self.size + col].map_or(' ', mark).to_string())
                .collect();
            writeln!(f, "{}", line.join("|"))?;
            if row + 1 < self.size {
                writeln!(f, "{}", "-".repeat(2 * self.size - 1))?;
            }
        }
        write!(f, "\nNext to play: {}", mark(self.next_player))
    }
}
