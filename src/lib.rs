//! Simon: the engine behind a "Simon Says" memory game.
//!
//! The engine grows a sequence of colored signals, replays it, and judges
//! whether the player reproduces it. Everything that renders, sounds or
//! vibrates lives outside, reached through the [`PlaybackSink`] and
//! [`PresentationObserver`] seams.
//!
//! # Core Concepts
//!
//! - **Session**: the turn-based state machine owning sequence, input and counters
//! - **Playback**: highlights scheduled at fixed offsets, advanced cooperatively
//! - **Token source**: injectable randomness, so tests can script sequences
//!
//! # Example
//!
//! ```rust
//! use simon::{ChoiceOutcome, GameSessionBuilder, Phase, RandomTokens};
//! use simon::playback::RecordingSink;
//!
//! let mut session = GameSessionBuilder::new()
//!     .sink(RecordingSink::new())
//!     .tokens(RandomTokens::seeded(3))
//!     .build()
//!     .unwrap();
//!
//! session.start();
//! while let Some(wait) = session.time_until_next_event() {
//!     session.advance(wait);
//! }
//! assert_eq!(session.phase(), Phase::AwaitingInput);
//!
//! let shown = session.sequence()[0];
//! assert_eq!(session.submit_choice(shown), ChoiceOutcome::RoundComplete { score: 1 });
//! assert!(session.advance_level().is_some());
//! assert_eq!(session.level(), 2);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod playback;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use builder::{BuildError, GameSessionBuilder};
pub use config::GameConfig;
pub use playback::{PlaybackSink, RoundId};
pub use session::{ChoiceOutcome, GameSession, Phase, PresentationObserver, SessionSnapshot};
pub use token::{ColorToken, RandomTokens, ScriptedTokens, TokenSource};
