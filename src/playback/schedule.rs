//! Cooperative schedule of playback events.
//!
//! A round's playback is planned up front as a finite list of tasks at fixed
//! offsets from the moment the round started. The owner advances a logical
//! clock and receives whatever became due. Scheduling a new round drops every
//! task of the previous one.

use crate::config::GameConfig;
use crate::token::ColorToken;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Identifier of one playback-then-input cycle.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct RoundId(u64);

impl RoundId {
    pub fn next(self) -> Self {
        RoundId(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round-{}", self.0)
    }
}

/// What a fired task asks the session to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Emphasize a token and play its cue
    Highlight(ColorToken),

    /// Remove the current emphasis
    Clear,

    /// Playback is over; input may be accepted
    Finished,
}

/// A single pending task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub round: RoundId,
    /// Offset from the start of the round
    pub due: Duration,
    /// Position in the plan, used to order tasks sharing a deadline
    pub order: usize,
    pub event: PlaybackEvent,
}

/// Build the task list for one round.
///
/// Token `i` is highlighted at `lead_in + i * step` and cleared `highlight`
/// later. `Finished` shares the deadline of the last clear and follows it.
/// Offsets saturate at `Duration::MAX`.
pub fn plan(round: RoundId, sequence: &[ColorToken], config: &GameConfig) -> Vec<ScheduledTask> {
    let mut tasks = Vec::with_capacity(sequence.len() * 2 + 1);
    let mut last_clear = config.lead_in();

    for (i, token) in sequence.iter().enumerate() {
        let start = config.lead_in().saturating_add(step_offset(config.step(), i));
        last_clear = start.saturating_add(config.highlight());
        tasks.push(ScheduledTask {
            round,
            due: start,
            order: tasks.len(),
            event: PlaybackEvent::Highlight(*token),
        });
        tasks.push(ScheduledTask {
            round,
            due: last_clear,
            order: tasks.len(),
            event: PlaybackEvent::Clear,
        });
    }

    tasks.push(ScheduledTask {
        round,
        due: last_clear,
        order: tasks.len(),
        event: PlaybackEvent::Finished,
    });
    tasks
}

fn step_offset(step: Duration, index: usize) -> Duration {
    u32::try_from(index)
        .ok()
        .and_then(|n| step.checked_mul(n))
        .unwrap_or(Duration::MAX)
}

/// Pending playback tasks plus the logical clock they are measured against.
#[derive(Debug, Default)]
pub struct PlaybackSchedule {
    active: Option<RoundId>,
    elapsed: Duration,
    tasks: VecDeque<ScheduledTask>,
}

impl PlaybackSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending with the plan for `round`.
    pub fn schedule(&mut self, round: RoundId, sequence: &[ColorToken], config: &GameConfig) {
        let mut planned = plan(round, sequence, config);
        planned.sort_by_key(|task| (task.due, task.order));

        self.tasks.clear();
        self.tasks.extend(planned);
        self.active = Some(round);
        self.elapsed = Duration::ZERO;
    }

    /// Drop all pending tasks.
    pub fn cancel(&mut self) {
        self.tasks.clear();
        self.active = None;
        self.elapsed = Duration::ZERO;
    }

    /// Move the clock forward and return the events that became due, in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<PlaybackEvent> {
        let Some(active) = self.active else {
            return Vec::new();
        };
        self.elapsed = self.elapsed.saturating_add(dt);

        let mut fired = Vec::new();
        while self.tasks.front().is_some_and(|task| task.due <= self.elapsed) {
            if let Some(task) = self.tasks.pop_front() {
                // Tasks from a superseded round never fire.
                if task.round == active {
                    fired.push(task.event);
                }
            }
        }

        if self.tasks.is_empty() {
            self.active = None;
        }
        fired
    }

    /// Fire everything still pending, regardless of deadlines.
    pub fn drain(&mut self) -> Vec<PlaybackEvent> {
        let remaining = self.time_until_next_final();
        self.advance(remaining)
    }

    /// Time left until the next task is due, if any is pending.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.tasks
            .front()
            .map(|task| task.due.saturating_sub(self.elapsed))
    }

    pub fn active_round(&self) -> Option<RoundId> {
        self.active
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Clock offset within the active round.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn time_until_next_final(&self) -> Duration {
        self.tasks
            .back()
            .map(|task| task.due.saturating_sub(self.elapsed))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorToken::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn plan_spaces_tokens_by_step() {
        let tasks = plan(RoundId(1), &[Red, Blue], &config());

        let timeline: Vec<_> = tasks.iter().map(|t| (t.due.as_millis(), t.event)).collect();
        assert_eq!(
            timeline,
            vec![
                (1000, PlaybackEvent::Highlight(Red)),
                (1500, PlaybackEvent::Clear),
                (2000, PlaybackEvent::Highlight(Blue)),
                (2500, PlaybackEvent::Clear),
                (2500, PlaybackEvent::Finished),
            ]
        );
    }

    #[test]
    fn plan_for_empty_sequence_only_finishes() {
        let tasks = plan(RoundId(1), &[], &config());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].event, PlaybackEvent::Finished);
        assert_eq!(tasks[0].due, Duration::from_millis(1000));
    }

    #[test]
    fn advance_fires_only_due_events() {
        let mut schedule = PlaybackSchedule::new();
        schedule.schedule(RoundId(1), &[Green], &config());

        assert!(schedule.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(
            schedule.advance(Duration::from_millis(1)),
            vec![PlaybackEvent::Highlight(Green)]
        );
        assert_eq!(schedule.time_until_next(), Some(Duration::from_millis(500)));
        assert_eq!(
            schedule.advance(Duration::from_millis(500)),
            vec![PlaybackEvent::Clear, PlaybackEvent::Finished]
        );
        assert!(schedule.is_idle());
        assert_eq!(schedule.active_round(), None);
    }

    #[test]
    fn clear_precedes_next_highlight_when_deadlines_meet() {
        let config = GameConfig {
            lead_in_ms: 0,
            step_ms: 100,
            highlight_ms: 100,
        };
        let mut schedule = PlaybackSchedule::new();
        schedule.schedule(RoundId(1), &[Red, Red], &config);

        let events = schedule.advance(Duration::from_millis(200));
        assert_eq!(
            events,
            vec![
                PlaybackEvent::Highlight(Red),
                PlaybackEvent::Clear,
                PlaybackEvent::Highlight(Red),
                PlaybackEvent::Clear,
                PlaybackEvent::Finished,
            ]
        );
    }

    #[test]
    fn rescheduling_supersedes_pending_round() {
        let mut schedule = PlaybackSchedule::new();
        schedule.schedule(RoundId(1), &[Red, Blue, Green], &config());
        schedule.advance(Duration::from_millis(1200));

        schedule.schedule(RoundId(2), &[Yellow], &config());
        assert_eq!(schedule.active_round(), Some(RoundId(2)));
        assert_eq!(schedule.pending(), 3);
        assert_eq!(schedule.elapsed(), Duration::ZERO);

        let events = schedule.drain();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::Highlight(Yellow),
                PlaybackEvent::Clear,
                PlaybackEvent::Finished,
            ]
        );
    }

    #[test]
    fn cancel_drops_everything() {
        let mut schedule = PlaybackSchedule::new();
        schedule.schedule(RoundId(4), &[Cyan, Pink], &config());
        schedule.cancel();

        assert!(schedule.is_idle());
        assert_eq!(schedule.time_until_next(), None);
        assert!(schedule.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn huge_step_saturates_instead_of_overflowing() {
        let config = GameConfig {
            lead_in_ms: u64::MAX,
            step_ms: u64::MAX,
            highlight_ms: u64::MAX,
        };
        let tasks = plan(RoundId(1), &[Red, Blue], &config);

        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].due, Duration::from_millis(u64::MAX));
        assert_eq!(tasks[2].due, Duration::MAX);
        assert_eq!(tasks[4].due, Duration::MAX);
    }

    #[test]
    fn advancing_by_max_after_partial_progress_flushes_round() {
        let mut schedule = PlaybackSchedule::new();
        schedule.schedule(RoundId(1), &[Red, Blue], &config());
        schedule.advance(Duration::from_millis(1));

        let events = schedule.advance(Duration::MAX);
        assert_eq!(events.len(), 5);
        assert_eq!(events.last(), Some(&PlaybackEvent::Finished));
        assert_eq!(schedule.elapsed(), Duration::MAX);
        assert!(schedule.is_idle());
    }

    #[test]
    fn round_id_increments_and_displays() {
        let round = RoundId::default().next().next();
        assert_eq!(round.value(), 2);
        assert_eq!(round.to_string(), "round-2");
    }
}
