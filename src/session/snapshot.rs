//! What the presentation layer sees of a session.

use super::phase::Phase;
use crate::playback::RoundId;
use crate::token::ColorToken;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Render-ready view of a session at one instant.
///
/// Only progress lengths are exposed, not the sequence itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub round: RoundId,
    pub phase: Phase,
    pub level: u32,
    pub score: u32,
    pub sequence_len: usize,
    pub input_len: usize,
    pub highlighted: Option<ColorToken>,
}

impl SessionSnapshot {
    /// Tokens still to be entered this round.
    pub fn remaining(&self) -> usize {
        self.sequence_len.saturating_sub(self.input_len)
    }

    /// Whether input affordances should be enabled.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingInput
    }
}

/// Receives a snapshot every time the observable state changes.
pub trait PresentationObserver {
    fn on_change(&mut self, snapshot: &SessionSnapshot);
}

impl<F> PresentationObserver for F
where
    F: FnMut(&SessionSnapshot),
{
    fn on_change(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}
