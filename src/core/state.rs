//! Game state: players, dice, turn and round progression.
//!
//! `GameState` is plain data. All rule-bearing transitions live in
//! [`GameEngine`](crate::rules::GameEngine); the helpers here only keep the
//! bookkeeping fields (turn number, sequence, history) consistent.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::dice::Dice;
use super::player::{PlayerId, Players};

/// Coarse session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `start`. Winning score and scripted opponent may change.
    NotStarted,
    /// Players are taking turns.
    InProgress,
}

/// Complete, observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players.
    pub players: Players,

    /// Dice as last rolled.
    pub dice: Dice,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Whether the round has been started.
    pub started: bool,

    /// Score a player must hit exactly to win.
    pub winning_score: u32,

    /// Rounds played this session, counting the current one (starts at 1).
    pub round_number: u32,

    /// Turn number within the round (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Actions taken this round.
    pub history: Vec<ActionRecord>,
}

impl GameState {
    /// Create the initial state for a session.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: Players::new(config.first_player.clone(), config.second_player.clone()),
            dice: Dice::RESET,
            active_player: PlayerId::FIRST,
            started: false,
            winning_score: config.winning_score.max(super::config::MIN_WINNING_SCORE),
            round_number: 1,
            turn_number: 1,
            action_sequence: 0,
            history: Vec::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.started {
            Phase::InProgress
        } else {
            Phase::NotStarted
        }
    }

    /// Whether the scripted opponent currently occupies a seat.
    #[must_use]
    pub fn scripted_enabled(&self) -> bool {
        self.players.scripted_seat().is_some()
    }

    /// Whether the active player's moves come from the scripted opponent.
    #[must_use]
    pub fn active_is_scripted(&self) -> bool {
        self.players[self.active_player].is_scripted
    }

    /// Score the active player has accumulated this turn.
    #[must_use]
    pub fn active_current(&self) -> u32 {
        self.players[self.active_player].current
    }

    /// Pass the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.other();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Record an action taken by the active player.
    pub fn record_action(&mut self, action: Action, dice: Option<Dice>) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push(ActionRecord::new(
            self.active_player,
            action,
            dice,
            self.turn_number,
            sequence,
        ));
    }

    /// Reset everything except wins and the winning score.
    ///
    /// Clears the started flag and unseats the scripted opponent.
    pub fn reset_round(&mut self) {
        for player in self.players.iter_mut() {
            player.current = 0;
            player.is_scripted = false;
        }
        self.dice = Dice::RESET;
        self.active_player = PlayerId::FIRST;
        self.started = false;
        self.round_number += 1;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.history.clear();
    }
}
