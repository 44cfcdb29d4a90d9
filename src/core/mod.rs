//! State primitives the session is built from.
//!
//! - `State`: naming and terminal checks for phases
//! - `Guard`: predicates that decide whether a command applies
//! - `StateHistory`: record of every phase change
//!
//! Nothing here performs side effects.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
