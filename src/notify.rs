//! Transient notifications: the winner banner and the double-six cue.
//!
//! A notice is a value with an expiry instant. Posting a notice of a kind
//! that is already showing replaces it and restarts its clock. Instants come
//! from `tokio::time` so paused-clock tests see deterministic expiry.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::core::Timings;
use crate::rules::GameEvent;

/// What a notice announces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// "`name` is the winner!"
    Winner { name: String },
    /// Celebration after a double six.
    DoubleSix,
}

impl NoticeKind {
    fn slot(&self) -> usize {
        match self {
            NoticeKind::Winner { .. } => 0,
            NoticeKind::DoubleSix => 1,
        }
    }

    /// Text shown for this notice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            NoticeKind::Winner { name } => format!("{name} is the winner!"),
            NoticeKind::DoubleSix => "Double six!".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Notice {
    kind: NoticeKind,
    expires_at: Instant,
}

/// The currently posted notices, at most one per kind.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    slots: [Option<Notice>; 2],
}

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice that expires `ttl` after `now`.
    pub fn post(&mut self, kind: NoticeKind, now: Instant, ttl: Duration) {
        let slot = kind.slot();
        self.slots[slot] = Some(Notice {
            kind,
            expires_at: now + ttl,
        });
    }

    /// Post the notices an engine event calls for.
    ///
    /// Returns true if anything was posted.
    pub fn observe(&mut self, event: &GameEvent, now: Instant, timings: &Timings) -> bool {
        match event {
            GameEvent::RoundWon { name, .. } => {
                self.post(NoticeKind::Winner { name: name.clone() }, now, timings.winner_banner());
                true
            }
            GameEvent::DoubleSix { .. } => {
                self.post(NoticeKind::DoubleSix, now, timings.double_six_cue());
                true
            }
            _ => false,
        }
    }

    /// Drop the double-six cue immediately.
    pub fn clear_double_six(&mut self) {
        self.slots[NoticeKind::DoubleSix.slot()] = None;
    }

    /// Remove expired notices. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut removed = false;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|n| n.expires_at <= now) {
                *slot = None;
                removed = true;
            }
        }
        removed
    }

    /// Earliest pending expiry.
    #[must_use]
    pub fn next_expiry(&self) -> Option<Instant> {
        self.slots.iter().flatten().map(|n| n.expires_at).min()
    }

    /// Notices still live at `now`.
    #[must_use]
    pub fn active(&self, now: Instant) -> Vec<NoticeKind> {
        self.slots
            .iter()
            .flatten()
            .filter(|n| n.expires_at > now)
            .map(|n| n.kind.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn winner(name: &str) -> NoticeKind {
        NoticeKind::Winner {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let mut notices = Notices::new();
        notices.post(winner("Ann"), now, Duration::from_millis(3000));
        notices.post(NoticeKind::DoubleSix, now, Duration::from_millis(1000));

        assert_eq!(notices.active(now).len(), 2);
        assert_eq!(notices.next_expiry(), Some(now + Duration::from_millis(1000)));

        let later = now + Duration::from_millis(1000);
        assert!(notices.expire(later));
        assert_eq!(notices.active(later), vec![winner("Ann")]);

        let much_later = now + Duration::from_millis(3000);
        assert!(notices.expire(much_later));
        assert!(notices.active(much_later).is_empty());
        assert_eq!(notices.next_expiry(), None);
        assert!(!notices.expire(much_later));
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let now = Instant::now();
        let mut notices = Notices::new();
        notices.post(winner("Ann"), now, Duration::from_millis(3000));

        let later = now + Duration::from_millis(2000);
        notices.post(winner("Bob"), later, Duration::from_millis(3000));

        let check = now + Duration::from_millis(3500);
        assert!(!notices.expire(check));
        assert_eq!(notices.active(check), vec![winner("Bob")]);
    }

    #[test]
    fn test_observe_events() {
        let now = Instant::now();
        let timings = Timings::default();
        let mut notices = Notices::new();

        assert!(!notices.observe(&GameEvent::Restarted, now, &timings));
        assert!(notices.observe(
            &GameEvent::DoubleSix {
                player: PlayerId::FIRST
            },
            now,
            &timings
        ));
        assert!(notices.observe(
            &GameEvent::RoundWon {
                player: PlayerId::FIRST,
                name: "Ann".to_string(),
                wins: 1
            },
            now,
            &timings
        ));

        assert_eq!(notices.active(now), vec![winner("Ann"), NoticeKind::DoubleSix]);

        notices.clear_double_six();
        assert_eq!(notices.active(now), vec![winner("Ann")]);
    }

    #[test]
    fn test_messages() {
        assert_eq!(winner("Ann").message(), "Ann is the winner!");
        assert_eq!(NoticeKind::DoubleSix.message(), "Double six!");
    }
}
