//! Player identification and the two-seat player table.
//!
//! ## PlayerId
//!
//! Seat identifier. The game always has exactly two seats: the human sits at
//! `PlayerId::FIRST`, and only `PlayerId::SECOND` may be scripted.
//!
//! ## Players
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The human seat, which always opens a round.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The seat that may be taken by the scripted opponent.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One seat's scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Score accumulated this round.
    pub current: u32,
    /// Rounds won this session.
    pub wins: u32,
    /// Whether moves for this seat are chosen by the scripted opponent.
    pub is_scripted: bool,
}

impl Player {
    /// Create a fresh player with no score and no wins.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: 0,
            wins: 0,
            is_scripted: false,
        }
    }
}

/// The two players at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    seats: [Player; PLAYER_COUNT],
}

impl Players {
    /// Seat two named players.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            seats: [Player::new(first), Player::new(second)],
        }
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::all().zip(self.seats.iter())
    }

    /// Iterate over all players mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.seats.iter_mut()
    }

    /// The seat held by the scripted opponent, if any.
    #[must_use]
    pub fn scripted_seat(&self) -> Option<PlayerId> {
        self.iter().find(|(_, p)| p.is_scripted).map(|(id, _)| id)
    }

    /// Zero every player's round score, keeping wins.
    pub fn clear_current(&mut self) {
        for player in self.iter_mut() {
            player.current = 0;
        }
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
