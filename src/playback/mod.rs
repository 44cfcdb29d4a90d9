//! Timed, non-interactive replay of the sequence.
//!
//! # Key Concepts
//!
//! - **Schedule**: a round's highlights planned as tasks at fixed offsets
//! - **Round key**: every task carries the round it belongs to, so a new round
//!   invalidates anything still pending from the old one
//! - **Sink**: the injected capability that performs the highlight side effect

mod schedule;
mod sink;

pub use schedule::{plan, PlaybackEvent, PlaybackSchedule, RoundId, ScheduledTask};
pub use sink::{PlaybackSink, RecordingSink, SilentSink};
