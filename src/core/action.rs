//! In-round actions and the per-round action history.
//!
//! Only three moves exist inside a round: roll, hold, and reset the current
//! score. Session-level operations (start, restart, toggling the scripted
//! opponent) are not actions; they live on the engine directly.

use serde::{Deserialize, Serialize};

use super::dice::Dice;
use super::player::PlayerId;

/// A move by the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll both dice.
    Roll,
    /// Keep the current score and pass the turn.
    Hold,
    /// Forfeit the current score and pass the turn.
    ResetScore,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Roll => "roll",
            Action::Hold => "hold",
            Action::ResetScore => "reset",
        };
        f.write_str(name)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Dice shown after a roll. `None` for hold and reset.
    pub dice: Option<Dice>,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, dice: Option<Dice>, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            dice,
            turn,
            sequence,
        }
    }
}
