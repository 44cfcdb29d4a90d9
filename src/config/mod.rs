//! Playback timing configuration.
//!
//! Validation accumulates every violation through Stillwater's `Validation`
//! instead of stopping at the first one.
//!
//! ```rust
//! use simon::config::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::from_json(r#"{ "step_ms": 800, "highlight_ms": 400 }"#).unwrap();
//! assert_eq!(config.step(), Duration::from_millis(800));
//! assert_eq!(config.lead_in(), Duration::from_millis(1000));
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default delay before the first highlight of a round.
pub const DEFAULT_LEAD_IN_MS: u64 = 1000;

/// Default spacing between consecutive highlights.
pub const DEFAULT_STEP_MS: u64 = 1000;

/// Default time a token stays highlighted.
pub const DEFAULT_HIGHLIGHT_MS: u64 = 500;

/// Timing of the playback phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause between entering `Playing` and the first highlight
    pub lead_in_ms: u64,

    /// Offset between the start of consecutive highlights
    pub step_ms: u64,

    /// How long each highlight lasts before it is cleared
    pub highlight_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: DEFAULT_LEAD_IN_MS,
            step_ms: DEFAULT_STEP_MS,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document and validate it.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(input)?;
        config.validated()
    }

    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if self.step_ms == 0 {
                Validation::fail(ConfigViolation::ZeroStep)
            } else {
                Validation::success(())
            },
            if self.highlight_ms == 0 {
                Validation::fail(ConfigViolation::ZeroHighlight)
            } else {
                Validation::success(())
            },
            // A clear landing after the next highlight would break playback ordering.
            if self.highlight_ms > self.step_ms {
                Validation::fail(ConfigViolation::HighlightOutlastsStep {
                    highlight_ms: self.highlight_ms,
                    step_ms: self.step_ms,
                })
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the config, returning it only if every rule holds.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}
