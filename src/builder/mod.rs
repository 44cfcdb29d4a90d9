//! Builder API for assembling a game session from its collaborators.
//!
//! A session needs a playback sink and a token source; the builder checks
//! both are present and validates the timing config before handing the
//! session over.

pub mod error;
pub mod macros;
pub mod session;

pub use error::BuildError;
pub use session::GameSessionBuilder;
