//! Discrete phases of a game session.

use std::fmt;

crate::state_enum! {
    /// Where a session is in its playback/input cycle.
    ///
    /// `GameOver` is final: nothing but a restart leaves it. A mismatch is
    /// ordinary control flow, so no phase counts as an error.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum Phase {
        /// Freshly created or mid-reset
        #[default]
        Idle,
        /// The sequence is being replayed; input is locked
        Playing,
        /// The player is reproducing the sequence
        AwaitingInput,
        /// The round was reproduced; waiting for `advance_level`
        Success,
        /// The player made a mistake; waiting for `start`
        GameOver,
    }
    final: [GameOver]
}

impl Phase {
    /// Whether the presentation layer should offer a choice to the caller.
    pub fn awaits_decision(&self) -> bool {
        matches!(self, Self::Success | Self::GameOver)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::core::State::name(self))
    }
}
