//! Game rules.
//!
//! `GameEngine` applies every transition of the dice game:
//! - Rolling, holding and forfeiting within a round
//! - Starting, restarting and seating the scripted opponent
//! - Detecting a win and carrying wins across rounds
//!
//! Each operation reports what happened as a list of `GameEvent`s.

pub mod engine;
pub mod event;

pub use engine::GameEngine;
pub use event::{Events, GameEvent};
