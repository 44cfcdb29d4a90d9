//! Builder for constructing game sessions.

use crate::builder::error::BuildError;
use crate::config::GameConfig;
use crate::playback::PlaybackSink;
use crate::session::{GameSession, PresentationObserver};
use crate::token::TokenSource;

/// Fluent builder for [`GameSession`].
///
/// The sink and the token source are required. The config defaults to
/// [`GameConfig::default`] and is validated on `build`.
pub struct GameSessionBuilder<P, R> {
    config: GameConfig,
    sink: Option<P>,
    tokens: Option<R>,
    observers: Vec<Box<dyn PresentationObserver>>,
}

impl<P: PlaybackSink, R: TokenSource> GameSessionBuilder<P, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            sink: None,
            tokens: None,
            observers: Vec::new(),
        }
    }

    /// Set the playback timing.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the playback sink (required).
    pub fn sink(mut self, sink: P) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the token source (required).
    pub fn tokens(mut self, tokens: R) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Add an observer that is subscribed when the session is built.
    pub fn observer(mut self, observer: impl PresentationObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the session in the `Idle` phase.
    pub fn build(self) -> Result<GameSession<P, R>, BuildError> {
        let sink = self.sink.ok_or(BuildError::MissingPlaybackSink)?;
        let tokens = self.tokens.ok_or(BuildError::MissingTokenSource)?;

        let mut session = GameSession::new(self.config, sink, tokens)?;
        for observer in self.observers {
            session.subscribe_boxed(observer);
        }
        Ok(session)
    }
}

impl<P: PlaybackSink, R: TokenSource> Default for GameSessionBuilder<P, R> {
    fn default() -> Self {
        Self::new()
    }
}
