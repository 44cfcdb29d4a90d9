//! State trait shared by every phase-like enum in the engine.
//!
//! A state is a plain value; inspecting it never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for session states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: transitions compare the current state against guards
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: states travel inside presentation snapshots
///
/// # Example
///
/// ```rust
/// use simon::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Dark,
///     Lit,
///     Burnt,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Dark => "Dark",
///             Self::Lit => "Lit",
///             Self::Burnt => "Burnt",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
///
/// assert!(Lamp::Burnt.is_final());
/// assert!(!Lamp::Lit.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and snapshots.
    fn name(&self) -> &str;

    /// Whether the state ends the game until an external restart.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the state represents a fault.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
