//! Game session: the turn-based state machine at the heart of the game.
//!
//! ```text
//! Idle --start--> Playing --(playback completes)--> AwaitingInput
//! AwaitingInput --submit_choice(mismatch)--> GameOver
//! AwaitingInput --submit_choice(completes sequence)--> Success
//! Success --advance_level--> Playing
//! any --start--> Playing
//! ```
//!
//! # Example
//!
//! ```rust
//! use simon::{ChoiceOutcome, ColorToken, GameSession, Phase, ScriptedTokens};
//! use simon::config::GameConfig;
//! use simon::playback::RecordingSink;
//!
//! let mut session = GameSession::new(
//!     GameConfig::default(),
//!     RecordingSink::new(),
//!     ScriptedTokens::new([ColorToken::Red]),
//! )
//! .unwrap();
//!
//! session.start();
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! session.complete_playback();
//! assert_eq!(session.sink().played, vec![ColorToken::Red]);
//!
//! let outcome = session.submit_choice(ColorToken::Red);
//! assert_eq!(outcome, ChoiceOutcome::RoundComplete { score: 1 });
//! assert_eq!(session.phase(), Phase::Success);
//! ```

mod machine;
mod phase;
mod snapshot;

pub use machine::{ChoiceOutcome, GameSession};
pub use phase::Phase;
pub use snapshot::{PresentationObserver, SessionSnapshot};
