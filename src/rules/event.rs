//! Events reported by the engine after each operation.
//!
//! Observers (the session, the terminal view, audio) react to events instead
//! of diffing states. Every operation returns the events it produced, in the
//! order they happened.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::audio::Cue;
use crate::core::{Dice, PlayerId};

/// Something that happened during an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The round started.
    Started,
    /// Dice were rolled by `player`.
    Rolled { player: PlayerId, dice: Dice },
    /// `player` rolled double six and lost their round score.
    DoubleSix { player: PlayerId },
    /// `player` kept their score and passed.
    Held { player: PlayerId },
    /// `player` gave up `forfeited` points and passed.
    ScoreForfeited { player: PlayerId, forfeited: u32 },
    /// The turn moved from one player to the other.
    TurnPassed { from: PlayerId, to: PlayerId },
    /// `player` hit the winning score exactly. `wins` is their new total.
    RoundWon { player: PlayerId, name: String, wins: u32 },
    /// The session returned to its pre-start state, wins kept.
    Restarted,
    /// The scripted opponent was seated or unseated.
    ScriptedToggled { enabled: bool },
    /// The winning score changed.
    WinningScoreChanged { score: u32 },
}

impl GameEvent {
    /// Sound to play for this event, if any.
    #[must_use]
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::Rolled { .. } => Some(Cue::DiceRoll),
            GameEvent::RoundWon { .. } => Some(Cue::Win),
            GameEvent::Started
            | GameEvent::Held { .. }
            | GameEvent::ScoreForfeited { .. }
            | GameEvent::Restarted
            | GameEvent::ScriptedToggled { .. } => Some(Cue::ButtonPress),
            GameEvent::DoubleSix { .. }
            | GameEvent::TurnPassed { .. }
            | GameEvent::WinningScoreChanged { .. } => None,
        }
    }
}

/// Events from one operation. Most operations emit three or fewer.
pub type Events = SmallVec<[GameEvent; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues() {
        let rolled = GameEvent::Rolled {
            player: PlayerId::FIRST,
            dice: Dice::new(2, 2).unwrap(),
        };
        assert_eq!(rolled.cue(), Some(Cue::DiceRoll));
        assert_eq!(GameEvent::Restarted.cue(), Some(Cue::ButtonPress));
        assert_eq!(
            GameEvent::DoubleSix {
                player: PlayerId::FIRST
            }
            .cue(),
            None
        );
        let won = GameEvent::RoundWon {
            player: PlayerId::SECOND,
            name: "B".to_string(),
            wins: 1,
        };
        assert_eq!(won.cue(), Some(Cue::Win));
    }
}
