//! Plays whole games between two strategies.

use crate::error::SearchError;
use crate::game_state::{GameOutcome, GameState, Player};
use crate::strategy::Strategy;
use tracing::{debug, info, instrument};

/// A game in progress between two strategies.
///
/// The first strategy plays for whoever is to move in the starting state. Both strategies are
/// reset when the match is created, so nothing cached during an earlier game is reused.
pub struct Match<S: GameState + 'static> {
    state: S,
    first_player: Player,
    strategies: [Box<dyn Strategy<S>>; 2],
    history: Vec<(Player, S::Move)>,
}

impl<S: GameState + 'static> Match<S> {
    /// Starts a match from `start`. `first` moves for the player to act in `start`.
    pub fn new(
        start: S,
        mut first: Box<dyn Strategy<S>>,
        mut second: Box<dyn Strategy<S>>,
    ) -> Self {
        first.reset();
        second.reset();
        Self {
            first_player: start.next_player(),
            state: start,
            strategies: [first, second],
            history: Vec::new(),
        }
    }

    /// The current position.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Every move played so far, with the player who made it.
    pub fn history(&self) -> &[(Player, S::Move)] {
        &self.history
    }

    /// The strategy that moves for `player`.
    pub fn strategy_for(&self, player: Player) -> &dyn Strategy<S> {
        self.strategies[self.seat(player)].as_ref()
    }

    /// Whether the current position is finished.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The winner of a finished game. `None` while playing or after a draw.
    pub fn winner(&self) -> Option<Player> {
        let mover = self.state.next_player();
        match self.state.outcome() {
            GameOutcome::Win => Some(mover),
            GameOutcome::Lose => Some(mover.opponent()),
            GameOutcome::Draw | GameOutcome::InProgress => None,
        }
    }

    /// Asks the player to move for a move and plays it.
    pub fn play_turn(&mut self) -> Result<S::Move, SearchError> {
        let mover = self.state.next_player();
        let seat = self.seat(mover);
        let chosen = self.strategies[seat].suggest_move(&self.state)?;
        debug!(?mover, ?chosen, ply = self.history.len() + 1, "move played");

        self.state = self.state.apply_move(&chosen);
        self.history.push((mover, chosen.clone()));
        Ok(chosen)
    }

    /// Plays until the game ends and returns the winner, `None` for a draw.
    #[instrument(level = "debug", skip_all)]
    pub fn play_out(&mut self) -> Result<Option<Player>, SearchError> {
        while !self.state.is_over() {
            self.play_turn()?;
        }
        let winner = self.winner();
        info!(?winner, plies = self.history.len(), "match finished");
        Ok(winner)
    }

    fn seat(&self, player: Player) -> usize {
        if player == self.first_player { 0 } else { 1 }
    }
}
