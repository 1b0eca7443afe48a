//! The game engine: every rule of the dice game.
//!
//! `GameEngine` owns the state and the dice RNG. Each operation runs to
//! completion, mutates the state, and returns the [`GameEvent`]s it produced.
//!
//! ## Rules
//!
//! - Players alternate turns; the first seat opens every round.
//! - A roll adds both dice to the roller's round score, except double six,
//!   which wipes it and passes the turn.
//! - Hitting the winning score *exactly* wins the round. Overshooting does
//!   not; the score simply stays above the target.
//! - A win adds one to the winner's tally and restarts the session with
//!   wins kept.

use tracing::{debug, info};

use crate::core::{
    clamp_winning_score, Action, Dice, GameConfig, GameError, GameRng, GameState, PlayerId,
};

use super::event::{Events, GameEvent};

/// RNG stream used for dice.
const DICE_STREAM: &str = "dice";

/// Game engine for one session.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    rng: GameRng,
    seed: u64,
}

impl GameEngine {
    /// Create an engine. Seats the scripted opponent if the config asks for it.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let base = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut engine = Self {
            state: GameState::new(config),
            rng: base.for_context(DICE_STREAM),
            seed: base.seed(),
        };
        if config.scripted {
            engine.toggle_scripted();
        }
        engine
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed the engine was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply an in-round action.
    pub fn apply(&mut self, action: Action) -> Result<Events, GameError> {
        match action {
            Action::Roll => self.roll(),
            Action::Hold => self.hold(),
            Action::ResetScore => self.reset_score(),
        }
    }

    /// Roll both dice for the active player.
    pub fn roll(&mut self) -> Result<Events, GameError> {
        self.ensure_started()?;
        let dice = Dice::roll(&mut self.rng);
        Ok(self.apply_roll(dice))
    }

    /// Apply a predetermined roll for the active player.
    ///
    /// Faces outside `1..=6` are refused and leave the state untouched.
    pub fn roll_with(&mut self, first: u8, second: u8) -> Result<Events, GameError> {
        self.ensure_started()?;
        let dice = Dice::new(first, second)?;
        Ok(self.apply_roll(dice))
    }

    /// Keep the current score and pass the turn.
    pub fn hold(&mut self) -> Result<Events, GameError> {
        self.ensure_started()?;
        let player = self.state.active_player;
        self.state.record_action(Action::Hold, None);
        debug!(%player, current = self.state.players[player].current, "hold");

        let mut events = Events::new();
        events.push(GameEvent::Held { player });
        self.pass_turn(&mut events);
        Ok(events)
    }

    /// Forfeit the active player's round score and pass the turn.
    pub fn reset_score(&mut self) -> Result<Events, GameError> {
        self.ensure_started()?;
        let player = self.state.active_player;
        let forfeited = std::mem::take(&mut self.state.players[player].current);
        self.state.record_action(Action::ResetScore, None);
        debug!(%player, forfeited, "score reset");

        let mut events = Events::new();
        events.push(GameEvent::ScoreForfeited { player, forfeited });
        self.pass_turn(&mut events);
        Ok(events)
    }

    /// Seat or unseat the scripted opponent in the second seat.
    ///
    /// Ignored once the round has started. Zeroes both round scores.
    pub fn toggle_scripted(&mut self) -> Events {
        let mut events = Events::new();
        if self.state.started {
            debug!("scripted opponent toggle ignored while started");
            return events;
        }

        let seat = &mut self.state.players[PlayerId::SECOND];
        seat.is_scripted = !seat.is_scripted;
        let enabled = seat.is_scripted;
        self.state.players.clear_current();
        info!(enabled, "scripted opponent toggled");

        events.push(GameEvent::ScriptedToggled { enabled });
        events
    }

    /// Start the round. Ignored if already started.
    pub fn start(&mut self) -> Events {
        let mut events = Events::new();
        if self.state.started {
            return events;
        }

        self.state.started = true;
        info!(
            round = self.state.round_number,
            winning_score = self.state.winning_score,
            scripted = self.state.scripted_enabled(),
            "round started"
        );
        events.push(GameEvent::Started);
        events
    }

    /// Return to the pre-start state, keeping wins.
    ///
    /// Clears round scores, dice, the started flag and the scripted opponent.
    pub fn restart(&mut self) -> Events {
        self.state.reset_round();
        info!(round = self.state.round_number, "session restarted");

        let mut events = Events::new();
        events.push(GameEvent::Restarted);
        events
    }

    /// Set the winning score, clamped to at least 2. Ignored once started.
    pub fn set_winning_score(&mut self, requested: i64) -> Events {
        let mut events = Events::new();
        if self.state.started {
            debug!(requested, "winning score change ignored while started");
            return events;
        }

        let score = clamp_winning_score(requested);
        if score != self.state.winning_score {
            self.state.winning_score = score;
            events.push(GameEvent::WinningScoreChanged { score });
        }
        events
    }

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.state.started {
            Ok(())
        } else {
            Err(GameError::NotStarted)
        }
    }

    fn apply_roll(&mut self, dice: Dice) -> Events {
        let player = self.state.active_player;
        let mut events = Events::new();

        self.state.dice = dice;
        self.state.record_action(Action::Roll, Some(dice));
        events.push(GameEvent::Rolled { player, dice });

        if dice.is_double_six() {
            self.state.players[player].current = 0;
            info!(%player, "double six");
            events.push(GameEvent::DoubleSix { player });
            self.pass_turn(&mut events);
            return events;
        }

        let current = {
            let seat = &mut self.state.players[player];
            seat.current += dice.sum();
            seat.current
        };
        debug!(%player, %dice, current, "rolled");

        if current == self.state.winning_score {
            let seat = &mut self.state.players[player];
            seat.wins += 1;
            seat.current = 0;
            let (name, wins) = (seat.name.clone(), seat.wins);
            info!(%player, %name, wins, "round won");

            events.push(GameEvent::RoundWon { player, name, wins });
            events.extend(self.restart());
        }

        events
    }

    fn pass_turn(&mut self, events: &mut Events) {
        let from = self.state.active_player;
        self.state.advance_turn();
        events.push(GameEvent::TurnPassed {
            from,
            to: self.state.active_player,
        });
    }
}
