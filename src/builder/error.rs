//! Build errors for the session builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a game session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Playback sink not specified. Call .sink(sink) before .build()")]
    MissingPlaybackSink,

    #[error("Token source not specified. Call .tokens(source) before .build()")]
    MissingTokenSource,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
