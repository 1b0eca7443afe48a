//! Display surface: what a front end shows and which controls it enables.
//!
//! Pure functions of a [`Snapshot`]. The terminal binary prints its
//! `Display` output; other front ends can use [`Controls`] alone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};
use crate::notify::NoticeKind;

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub notices: Vec<NoticeKind>,
}

/// Which controls are shown and enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub score_input: bool,
    pub toggle_scripted: bool,
    pub roll: bool,
    pub hold: bool,
    pub reset_score: bool,
    pub restart: bool,
}

impl Controls {
    /// Derive control availability from the state.
    ///
    /// Before the round: start, score input and the opponent toggle.
    /// During the round: roll, hold and reset for humans only; restart always.
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        let human_turn = state.started && !state.active_is_scripted();
        Self {
            start: !state.started,
            score_input: !state.started,
            toggle_scripted: !state.started,
            roll: human_turn,
            hold: human_turn,
            reset_score: human_turn,
            restart: state.started,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = &self.state;

        writeln!(f, "Winning Score: {}", state.winning_score)?;
        for notice in &self.notices {
            writeln!(f, "*** {} ***", notice.message())?;
        }

        for (id, player) in state.players.iter() {
            let marker = if is_active(state, id) { '>' } else { ' ' };
            let bot = if player.is_scripted { " [Bot]" } else { "" };
            writeln!(
                f,
                "{marker} {} (Wins: {}){bot}  Current Score: {}",
                player.name, player.wins, player.current
            )?;
        }

        let [first, second] = state.dice.glyphs();
        writeln!(f, "    {first}  {second}")?;
        writeln!(f, "{}", controls_line(state))
    }
}

fn controls_line(state: &GameState) -> String {
    let controls = Controls::for_state(state);
    let mut items = Vec::new();
    if controls.start {
        items.push("[s]tart");
        items.push("score <n>");
    }
    if controls.toggle_scripted {
        items.push(if state.scripted_enabled() {
            "[b] play against human"
        } else {
            "[b] play against bot"
        });
    }
    if controls.roll {
        items.push("[r]oll");
        items.push("[h]old");
        items.push("[x] reset score");
    }
    if controls.restart {
        items.push("restart");
    }
    if state.started && state.active_is_scripted() {
        items.push("(bot is playing)");
    }
    items.push("[q]uit");
    items.join("  ")
}

/// Whether `player` is the one to move.
#[must_use]
pub fn is_active(state: &GameState, player: PlayerId) -> bool {
    state.started && state.active_player == player
}
