//! Phase transition history.
//!
//! Every phase change a session makes is recorded with the level it happened
//! at. `record` builds a new history and leaves the receiver alone; an owner
//! appending to its own log uses `push`.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use simon::core::StateTransition;
/// use simon::Phase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Playing,
///     to: Phase::AwaitingInput,
///     timestamp: Utc::now(),
///     level: 1,
/// };
/// assert_eq!(transition.level, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Game level at the moment of the transition
    pub level: u32,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use simon::core::{StateHistory, StateTransition};
/// use simon::Phase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Idle,
///         to: Phase::Playing,
///         timestamp: Utc::now(),
///         level: 1,
///     })
///     .record(StateTransition {
///         from: Phase::Playing,
///         to: Phase::AwaitingInput,
///         timestamp: Utc::now(),
///         level: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::Playing, &Phase::AwaitingInput]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of transitions that entered `state`.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
