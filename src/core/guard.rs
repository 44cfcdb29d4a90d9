//! Guard predicates that gate session commands.
//!
//! A command is only applied when its guard admits the current phase.
//! Commands rejected by a guard are dropped, never reported as errors.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use simon::core::Guard;
/// use simon::Phase;
///
/// let accepts_input = Guard::new(|p: &Phase| matches!(p, Phase::AwaitingInput));
///
/// assert!(accepts_input.check(&Phase::AwaitingInput));
/// assert!(!accepts_input.check(&Phase::Playing));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits exactly one state.
    pub fn only(state: S) -> Self
    where
        S: 'static,
    {
        Self::new(move |current| *current == state)
    }

    /// Check if the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
