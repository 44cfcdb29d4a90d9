//! Configuration error types.

use thiserror::Error;

/// A single invalid setting in a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("step_ms must be greater than zero")]
    ZeroStep,

    #[error("highlight_ms must be greater than zero")]
    ZeroHighlight,

    #[error("highlight_ms ({highlight_ms}) must not exceed step_ms ({step_ms})")]
    HighlightOutlastsStep { highlight_ms: u64, step_ms: u64 },
}

/// Errors that can occur when loading a game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for a config
    #[error("Failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but one or more settings are invalid
    #[error("Invalid game config: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
