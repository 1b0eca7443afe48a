//! Sound cues.
//!
//! Playback is fire-and-forget: the game never waits on a sink and never
//! changes state because of a playback result. [`play_cue`] logs and drops
//! any failure, so a blocked or missing output device cannot affect a round.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sounds the game asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    DiceRoll,
    Win,
    ButtonPress,
}

/// Playback failure.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Anything that can play a cue.
pub trait AudioSink: Send {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Discards every cue.
#[derive(Clone, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell for wins and stays quiet otherwise.
#[derive(Debug)]
pub struct TerminalBell<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        if cue == Cue::Win {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Play a cue, swallowing failures.
pub fn play_cue(sink: &mut dyn AudioSink, cue: Cue) {
    if let Err(err) = sink.play(cue) {
        debug!(?cue, %err, "audio cue dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl AudioSink for Broken {
        fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
            Err(AudioError::Unavailable("autoplay blocked".to_string()))
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut sink = Broken;
        play_cue(&mut sink, Cue::ButtonPress);
        play_cue(&mut sink, Cue::Win);
    }

    #[test]
    fn test_bell_only_on_win() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::DiceRoll).unwrap();
        bell.play(Cue::ButtonPress).unwrap();
        assert!(bell.out.is_empty());

        bell.play(Cue::Win).unwrap();
        assert_eq!(bell.out, b"\x07");
    }
}
