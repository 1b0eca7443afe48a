//! # dice-roller
//!
//! A two-player dice game with an optional scripted opponent.
//!
//! Players take turns rolling two dice and adding them to a round score.
//! Double six wipes the roller's score and passes the turn. Hitting the
//! winning score exactly wins the round; wins carry over between rounds.
//!
//! ## Design
//!
//! - **Plain state, explicit transitions**: `GameState` is data;
//!   `GameEngine` applies every rule and reports `GameEvent`s.
//!
//! - **Deterministic when seeded**: dice and scripted decisions draw from
//!   separate ChaCha8 streams derived from one seed.
//!
//! - **One task owns the game**: `Session` serializes commands, the
//!   scripted-opponent timer and notification expiry on a single task.
//!
//! ## Modules
//!
//! - `core`: Players, dice, state, actions, RNG, configuration, errors
//! - `rules`: The game engine and its events
//! - `bot`: Scripted opponent decision rule
//! - `notify`: Expiring winner banner and double-six cue
//! - `audio`: Sound cues and sinks
//! - `view`: Control gating and text rendering
//! - `session`: Async driver with mailbox and snapshots

pub mod audio;
pub mod bot;
pub mod core;
pub mod notify;
pub mod rules;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Dice, GameConfig, GameError, GameRng, GameState, Phase, Player,
    PlayerId, Players, Timings,
};

pub use crate::rules::{Events, GameEngine, GameEvent};

pub use crate::bot::{ScriptedOpponent, TurnPolicy};

pub use crate::notify::{NoticeKind, Notices};

pub use crate::audio::{AudioSink, Cue};

pub use crate::view::{Controls, Snapshot};

pub use crate::session::{Command, Mailbox, Session};
