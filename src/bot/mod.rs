//! Automated play for the second seat.
//!
//! The scripted opponent decides one move per tick. It holds only a per-turn
//! attempt counter and its own RNG stream; the timer that drives it lives in
//! [`session`](crate::session).
//!
//! ## Example
//!
//! ```
//! use dice_roller::bot::{ScriptedOpponent, TurnPolicy};
//! use dice_roller::core::{GameConfig, GameRng};
//! use dice_roller::rules::GameEngine;
//!
//! let mut engine = GameEngine::new(&GameConfig::default().with_seed(3).with_scripted(true));
//! engine.start();
//! engine.hold().unwrap();
//!
//! let mut bot = ScriptedOpponent::new(5, GameRng::new(3));
//! let action = bot.decide(engine.state()).expect("bot's turn");
//! engine.apply(action).unwrap();
//! ```

pub mod policy;

pub use policy::{ScriptedOpponent, TurnPolicy};
