//! Turn policies for automated seats.
//!
//! `TurnPolicy` is asked once per tick for the next move. `ScriptedOpponent`
//! is the only built-in policy: a fixed probabilistic rule, not a search.

use tracing::trace;

use crate::core::{Action, GameRng, GameState, PlayerId};

/// Picks the next move for an automated seat.
pub trait TurnPolicy: Send {
    /// Decide the next action, or `None` if this policy should not act now.
    fn decide(&mut self, state: &GameState) -> Option<Action>;
}

/// The scripted opponent.
///
/// Each tick it bumps a per-turn attempt counter and draws a threshold
/// uniformly from `0..=max_rolls`. While the counter stays at or below the
/// threshold it rolls. Otherwise it holds if the current score plus the last
/// dice would still be under the target, and forfeits if not.
///
/// The number of rolls per turn is random but never exceeds `max_rolls`;
/// later attempts need larger draws, so turns tend to stop early.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    seat: PlayerId,
    max_rolls: u32,
    rng: GameRng,
    attempts: u32,
    /// (round, turn) the counter belongs to.
    turn_key: Option<(u32, u32)>,
}

impl ScriptedOpponent {
    /// Create a scripted opponent for the second seat.
    #[must_use]
    pub fn new(max_rolls: u32, rng: GameRng) -> Self {
        Self {
            seat: PlayerId::SECOND,
            max_rolls,
            rng,
            attempts: 0,
            turn_key: None,
        }
    }

    /// Attempts made so far this turn.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether this opponent should be acting in `state`.
    #[must_use]
    pub fn should_act(&self, state: &GameState) -> bool {
        state.started && state.active_player == self.seat && state.players[self.seat].is_scripted
    }

    fn sync_turn(&mut self, state: &GameState) {
        let key = (state.round_number, state.turn_number);
        if self.turn_key != Some(key) {
            self.turn_key = Some(key);
            self.attempts = 0;
        }
    }
}

impl TurnPolicy for ScriptedOpponent {
    fn decide(&mut self, state: &GameState) -> Option<Action> {
        if !self.should_act(state) {
            return None;
        }
        self.sync_turn(state);

        self.attempts += 1;
        let threshold = self.rng.gen_inclusive(self.max_rolls);
        let action = if self.attempts <= threshold {
            Action::Roll
        } else if state.active_current() + state.dice.sum() < state.winning_score {
            Action::Hold
        } else {
            Action::ResetScore
        };

        trace!(attempts = self.attempts, threshold, %action, "scripted decision");
        Some(action)
    }
}
