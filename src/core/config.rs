//! Game configuration types.
//!
//! - `GameConfig`: winning score, player names, scripted-opponent cap, seed
//! - `Timings`: cadence of the scripted opponent and notification lifetimes
//!
//! Only the winning score is a rule of the game; everything else is a
//! runtime setting. Configs can be built in code with the `with_*` methods or
//! loaded from YAML, where every field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;

/// Smallest accepted winning score.
pub const MIN_WINNING_SCORE: u32 = 2;

/// Winning score used when none is configured.
pub const DEFAULT_WINNING_SCORE: u32 = 100;

/// Upper bound of the scripted opponent's per-tick roll threshold.
pub const DEFAULT_BOT_MAX_ROLLS: u32 = 5;

/// Clamp a requested winning score to the accepted range.
///
/// Anything below 2 (including zero and negatives) becomes 2.
#[must_use]
pub fn clamp_winning_score(requested: i64) -> u32 {
    u32::try_from(requested.max(i64::from(MIN_WINNING_SCORE))).unwrap_or(u32::MAX)
}

/// Timer settings, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Interval between scripted-opponent decisions.
    pub bot_tick_ms: u64,
    /// How long the winner banner stays up.
    pub winner_banner_ms: u64,
    /// How long the double-six cue stays up.
    pub double_six_cue_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            bot_tick_ms: 1000,
            winner_banner_ms: 3000,
            double_six_cue_ms: 1000,
        }
    }
}

impl Timings {
    #[must_use]
    pub fn bot_tick(&self) -> Duration {
        Duration::from_millis(self.bot_tick_ms.max(1))
    }

    #[must_use]
    pub fn winner_banner(&self) -> Duration {
        Duration::from_millis(self.winner_banner_ms)
    }

    #[must_use]
    pub fn double_six_cue(&self) -> Duration {
        Duration::from_millis(self.double_six_cue_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score a player must hit exactly to win the round.
    pub winning_score: u32,

    /// Name of the first (human) seat.
    pub first_player: String,

    /// Name of the second seat.
    pub second_player: String,

    /// Upper bound of the scripted opponent's threshold draw.
    pub bot_max_rolls: u32,

    /// Seat the scripted opponent before the first round.
    pub scripted: bool,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Timer settings.
    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            first_player: "Player 1".to_string(),
            second_player: "Player 2".to_string(),
            bot_max_rolls: DEFAULT_BOT_MAX_ROLLS,
            scripted: false,
            seed: None,
            timings: Timings::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from YAML. The winning score is clamped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        Ok(config.normalized())
    }

    /// Read and parse a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Set the winning score, clamped to the minimum.
    pub fn with_winning_score(mut self, score: i64) -> Self {
        self.winning_score = clamp_winning_score(score);
        self
    }

    /// Set both player names.
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_player = first.into();
        self.second_player = second.into();
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seat the scripted opponent at startup.
    pub fn with_scripted(mut self, scripted: bool) -> Self {
        self.scripted = scripted;
        self
    }

    /// Set the scripted opponent's threshold cap.
    pub fn with_bot_max_rolls(mut self, max: u32) -> Self {
        self.bot_max_rolls = max;
        self
    }

    /// Set the scripted opponent's tick interval.
    pub fn with_bot_tick_ms(mut self, ms: u64) -> Self {
        self.timings.bot_tick_ms = ms;
        self
    }

    fn normalized(mut self) -> Self {
        self.winning_score = self.winning_score.max(MIN_WINNING_SCORE);
        self
    }
}
