//! Async session driver.
//!
//! A `Session` owns the engine and runs on a single task. Front ends talk to
//! it through a cloneable [`Mailbox`] and observe it through a
//! `watch::Receiver<Snapshot>`.
//!
//! ## Scripted-opponent timer
//!
//! The timer only exists while the round is started and the active seat is
//! scripted. It is keyed by (round, turn): after every committed mutation
//! the loop recomputes the key, dropping the timer when the key is gone and
//! replacing it when the key changed. A tick therefore always acts on the
//! state it was armed for.
//!
//! ```no_run
//! use dice_roller::audio::Silent;
//! use dice_roller::core::GameConfig;
//! use dice_roller::session::Session;
//!
//! # async fn demo() -> Result<(), dice_roller::core::GameError> {
//! let (session, mailbox, mut snapshots) = Session::new(&GameConfig::default(), Box::new(Silent));
//! tokio::spawn(session.run());
//!
//! mailbox.start().await?;
//! mailbox.roll().await?;
//! snapshots.changed().await.ok();
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::audio::{play_cue, AudioSink};
use crate::bot::{ScriptedOpponent, TurnPolicy};
use crate::core::{Action, GameConfig, GameError, GameRng, Timings};
use crate::notify::Notices;
use crate::rules::{Events, GameEngine, GameEvent};
use crate::view::Snapshot;

const MAILBOX_CAPACITY: usize = 32;

/// RNG stream used for scripted decisions.
const BOT_STREAM: &str = "bot";

/// Requests a front end can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Roll,
    Hold,
    ResetScore,
    Restart,
    Start,
    ToggleScripted,
    SetWinningScore(i64),
}

/// Input that does not name a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`score` needs a number, got `{0}`")]
    BadScore(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let word = words.next().ok_or(ParseCommandError::Empty)?;
        let command = match word.to_ascii_lowercase().as_str() {
            "r" | "roll" => Command::Roll,
            "h" | "hold" => Command::Hold,
            "x" | "reset" => Command::ResetScore,
            "restart" => Command::Restart,
            "s" | "start" => Command::Start,
            "b" | "bot" => Command::ToggleScripted,
            "score" => {
                let arg = words.next().unwrap_or_default();
                let value = arg
                    .parse()
                    .map_err(|_| ParseCommandError::BadScore(arg.to_string()))?;
                Command::SetWinningScore(value)
            }
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

struct Request {
    command: Command,
    response: oneshot::Sender<Result<(), GameError>>,
}

/// Handle for sending commands to a running session.
#[derive(Clone, Debug)]
pub struct Mailbox {
    sender: mpsc::Sender<Request>,
}

impl Mailbox {
    /// Send a command and wait for the session to apply it.
    pub async fn send(&self, command: Command) -> Result<(), GameError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Request { command, response })
            .await
            .map_err(|_| GameError::SessionClosed)?;
        receiver.await.map_err(|_| GameError::SessionClosed)?
    }

    pub async fn roll(&self) -> Result<(), GameError> {
        self.send(Command::Roll).await
    }

    pub async fn hold(&self) -> Result<(), GameError> {
        self.send(Command::Hold).await
    }

    pub async fn reset_score(&self) -> Result<(), GameError> {
        self.send(Command::ResetScore).await
    }

    pub async fn restart(&self) -> Result<(), GameError> {
        self.send(Command::Restart).await
    }

    pub async fn start(&self) -> Result<(), GameError> {
        self.send(Command::Start).await
    }

    pub async fn toggle_scripted(&self) -> Result<(), GameError> {
        self.send(Command::ToggleScripted).await
    }

    pub async fn set_winning_score(&self, score: i64) -> Result<(), GameError> {
        self.send(Command::SetWinningScore(score)).await
    }
}

struct BotTimer {
    key: (u32, u32),
    interval: Interval,
}

/// A game session driven by commands and timers.
pub struct Session {
    engine: GameEngine,
    policy: Box<dyn TurnPolicy>,
    audio: Box<dyn AudioSink>,
    notices: Notices,
    timings: Timings,
    requests: mpsc::Receiver<Request>,
    snapshots: watch::Sender<Snapshot>,
    bot_timer: Option<BotTimer>,
}

impl Session {
    /// Create a session with the built-in scripted opponent.
    pub fn new(
        config: &GameConfig,
        audio: Box<dyn AudioSink>,
    ) -> (Self, Mailbox, watch::Receiver<Snapshot>) {
        let engine = GameEngine::new(config);
        let rng = GameRng::new(engine.seed()).for_context(BOT_STREAM);
        let policy = Box::new(ScriptedOpponent::new(config.bot_max_rolls, rng));
        Self::with_policy(engine, policy, audio, config.timings.clone())
    }

    /// Create a session around an existing engine and policy.
    pub fn with_policy(
        engine: GameEngine,
        policy: Box<dyn TurnPolicy>,
        audio: Box<dyn AudioSink>,
        timings: Timings,
    ) -> (Self, Mailbox, watch::Receiver<Snapshot>) {
        let (sender, requests) = mpsc::channel(MAILBOX_CAPACITY);
        let initial = Snapshot {
            state: engine.state().clone(),
            notices: Vec::new(),
        };
        let (snapshots, receiver) = watch::channel(initial);
        let session = Self {
            engine,
            policy,
            audio,
            notices: Notices::new(),
            timings,
            requests,
            snapshots,
            bot_timer: None,
        };
        (session, Mailbox { sender }, receiver)
    }

    /// Run until every mailbox has been dropped.
    pub async fn run(mut self) {
        info!(seed = self.engine.seed(), "session running");
        loop {
            self.rearm_bot_timer();
            let expiry = self.notices.next_expiry();

            tokio::select! {
                request = self.requests.recv() => {
                    let Some(request) = request else {
                        break;
                    };
                    let result = self.handle(request.command);
                    if request.response.send(result).is_err() {
                        debug!("command sender went away before the reply");
                    }
                }
                _ = Self::bot_tick(&mut self.bot_timer) => {
                    self.bot_turn();
                }
                _ = Self::sleep_until(expiry) => {
                    if self.notices.expire(Instant::now()) {
                        self.publish();
                    }
                }
            }
        }
        info!("session stopped");
    }

    fn handle(&mut self, command: Command) -> Result<(), GameError> {
        let in_round = matches!(command, Command::Roll | Command::Hold | Command::ResetScore);
        if in_round && self.engine.state().started && self.engine.state().active_is_scripted() {
            debug!(?command, "refused during scripted turn");
            return Err(GameError::ScriptedTurn);
        }

        let events = match command {
            Command::Roll => self.engine.apply(Action::Roll)?,
            Command::Hold => self.engine.apply(Action::Hold)?,
            Command::ResetScore => self.engine.apply(Action::ResetScore)?,
            Command::Restart => self.engine.restart(),
            Command::Start => self.engine.start(),
            Command::ToggleScripted => self.engine.toggle_scripted(),
            Command::SetWinningScore(score) => self.engine.set_winning_score(score),
        };
        self.process(events);
        Ok(())
    }

    fn bot_turn(&mut self) {
        let Some(action) = self.policy.decide(self.engine.state()) else {
            return;
        };
        match self.engine.apply(action) {
            Ok(events) => {
                debug!(%action, "scripted move");
                self.process(events);
            }
            Err(err) => warn!(%action, %err, "scripted move rejected"),
        }
    }

    fn process(&mut self, events: Events) {
        let now = Instant::now();
        for event in &events {
            if let Some(cue) = event.cue() {
                play_cue(self.audio.as_mut(), cue);
            }
            self.notices.observe(event, now, &self.timings);
            if *event == GameEvent::Restarted {
                self.notices.clear_double_six();
            }
        }
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = Snapshot {
            state: self.engine.state().clone(),
            notices: self.notices.active(Instant::now()),
        };
        self.snapshots.send_replace(snapshot);
    }

    /// Drop or replace the bot timer to match the committed state.
    fn rearm_bot_timer(&mut self) {
        let state = self.engine.state();
        let wanted = (state.started && state.active_is_scripted())
            .then_some((state.round_number, state.turn_number));

        match (wanted, self.bot_timer.as_ref().map(|t| t.key)) {
            (None, None) => {}
            (Some(key), Some(current)) if key == current => {}
            (None, Some(_)) => {
                debug!("scripted timer cancelled");
                self.bot_timer = None;
            }
            (Some(key), _) => {
                let period = self.timings.bot_tick();
                let mut interval = time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                debug!(round = key.0, turn = key.1, "scripted timer armed");
                self.bot_timer = Some(BotTimer { key, interval });
            }
        }
    }

    async fn bot_tick(timer: &mut Option<BotTimer>) {
        match timer {
            Some(timer) => {
                timer.interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }

    async fn sleep_until(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
