//! Core game types: players, dice, state, actions, RNG, configuration, errors.
//!
//! Nothing in this module enforces the rules of the game; it only holds the
//! data the rules operate on.

pub mod action;
pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{clamp_winning_score, GameConfig, Timings, MIN_WINNING_SCORE};
pub use dice::{face_glyph, Dice};
pub use error::{ConfigError, GameError};
pub use player::{Player, PlayerId, Players, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{GameState, Phase};
