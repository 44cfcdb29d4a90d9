//! The game session state machine.

use super::phase::Phase;
use super::snapshot::{PresentationObserver, SessionSnapshot};
use crate::config::{ConfigError, GameConfig};
use crate::core::{Guard, StateHistory, StateTransition};
use crate::playback::{PlaybackEvent, PlaybackSchedule, PlaybackSink, RoundId};
use crate::token::{ColorToken, TokenSource};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// What a call to [`GameSession::submit_choice`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Input was locked; nothing changed
    Ignored { phase: Phase },

    /// Correct so far, more tokens needed
    Accepted { remaining: usize },

    /// The whole sequence was reproduced
    RoundComplete { score: u32 },

    /// Wrong token; the game is over
    Mismatch { expected: ColorToken, got: ColorToken },
}

struct CommandGuards {
    input: Guard<Phase>,
    advance: Guard<Phase>,
}

impl Default for CommandGuards {
    fn default() -> Self {
        Self {
            input: Guard::only(Phase::AwaitingInput),
            advance: Guard::only(Phase::Success),
        }
    }
}

/// One player's game: sequence, input, counters and playback.
///
/// Time only moves when the owner calls [`advance`](Self::advance), so the
/// session can be driven by a UI frame loop, an async timer or a test.
pub struct GameSession<P, R> {
    id: Uuid,
    config: GameConfig,
    sink: P,
    tokens: R,
    observers: Vec<Box<dyn PresentationObserver>>,
    guards: CommandGuards,
    sequence: Vec<ColorToken>,
    user_input: Vec<ColorToken>,
    level: u32,
    score: u32,
    phase: Phase,
    highlighted: Option<ColorToken>,
    round: RoundId,
    schedule: PlaybackSchedule,
    history: StateHistory<Phase>,
    last_published: Option<SessionSnapshot>,
}

impl<P: PlaybackSink, R: TokenSource> GameSession<P, R> {
    /// Create an idle session.
    ///
    /// Fails if the config breaks any timing rule.
    pub fn new(config: GameConfig, sink: P, tokens: R) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            sink,
            tokens,
            observers: Vec::new(),
            guards: CommandGuards::default(),
            sequence: Vec::new(),
            user_input: Vec::new(),
            level: 1,
            score: 0,
            phase: Phase::Idle,
            highlighted: None,
            round: RoundId::default(),
            schedule: PlaybackSchedule::new(),
            history: StateHistory::new(),
            last_published: None,
        })
    }

    /// Register an observer. It immediately receives the current snapshot.
    pub fn subscribe(&mut self, observer: impl PresentationObserver + 'static) {
        self.subscribe_boxed(Box::new(observer));
    }

    pub(crate) fn subscribe_boxed(&mut self, mut observer: Box<dyn PresentationObserver>) {
        observer.on_change(&self.snapshot());
        self.observers.push(observer);
    }

    /// Reset everything and begin a new game with a one-token sequence.
    ///
    /// Allowed from any phase; pending playback of an earlier round is dropped.
    /// The history restarts from `Idle`.
    pub fn start(&mut self) -> RoundId {
        self.schedule.cancel();
        self.sequence.clear();
        self.user_input.clear();
        self.level = 1;
        self.score = 0;
        self.highlighted = None;
        self.transition(Phase::Idle);
        self.history = StateHistory::new();

        let token = self.tokens.next_token();
        self.sequence.push(token);

        let round = self.begin_playback();
        info!(session = %self.id, %round, "game started");
        round
    }

    /// Feed one player choice into the current round.
    pub fn submit_choice(&mut self, token: ColorToken) -> ChoiceOutcome {
        if !self.guards.input.check(&self.phase) {
            debug!(session = %self.id, phase = %self.phase, %token, "choice ignored");
            return ChoiceOutcome::Ignored { phase: self.phase };
        }
        let Some(&expected) = self.sequence.get(self.user_input.len()) else {
            return ChoiceOutcome::Ignored { phase: self.phase };
        };

        self.sink.input_feedback(token);
        self.user_input.push(token);

        let outcome = if token != expected {
            self.transition(Phase::GameOver);
            info!(
                session = %self.id,
                level = self.level,
                score = self.score,
                %expected,
                got = %token,
                "game over"
            );
            ChoiceOutcome::Mismatch {
                expected,
                got: token,
            }
        } else if self.user_input.len() == self.sequence.len() {
            self.score += 1;
            self.transition(Phase::Success);
            info!(session = %self.id, level = self.level, score = self.score, "round complete");
            ChoiceOutcome::RoundComplete { score: self.score }
        } else {
            ChoiceOutcome::Accepted {
                remaining: self.sequence.len() - self.user_input.len(),
            }
        };

        self.publish();
        outcome
    }

    /// Move from `Success` to the next level and replay the longer sequence.
    ///
    /// Returns `None` without touching anything in any other phase.
    pub fn advance_level(&mut self) -> Option<RoundId> {
        if !self.guards.advance.check(&self.phase) {
            debug!(session = %self.id, phase = %self.phase, "advance ignored");
            return None;
        }

        self.level += 1;
        let token = self.tokens.next_token();
        self.sequence.push(token);
        self.user_input.clear();

        let round = self.begin_playback();
        debug!(session = %self.id, level = self.level, %round, "level advanced");
        Some(round)
    }

    /// Move the playback clock forward, firing every event that became due.
    ///
    /// Returns how many events fired.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let events = self.schedule.advance(dt);
        let fired = events.len();
        for event in events {
            self.dispatch(event);
        }
        fired
    }

    /// Fire all remaining playback events at once.
    pub fn complete_playback(&mut self) -> usize {
        let events = self.schedule.drain();
        let fired = events.len();
        for event in events {
            self.dispatch(event);
        }
        fired
    }

    /// Time until the next playback event, or `None` when nothing is pending.
    pub fn time_until_next_event(&self) -> Option<Duration> {
        self.schedule.time_until_next()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            round: self.round,
            phase: self.phase,
            level: self.level,
            score: self.score,
            sequence_len: self.sequence.len(),
            input_len: self.user_input.len(),
            highlighted: self.highlighted,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sequence(&self) -> &[ColorToken] {
        &self.sequence
    }

    pub fn user_input(&self) -> &[ColorToken] {
        &self.user_input
    }

    pub fn highlighted(&self) -> Option<ColorToken> {
        self.highlighted
    }

    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    fn begin_playback(&mut self) -> RoundId {
        self.round = self.round.next();
        self.highlighted = None;
        self.transition(Phase::Playing);
        self.schedule.schedule(self.round, &self.sequence, &self.config);
        self.publish();
        self.round
    }

    fn dispatch(&mut self, event: PlaybackEvent) {
        trace!(session = %self.id, round = %self.round, ?event, "playback event");
        match event {
            PlaybackEvent::Highlight(token) => {
                self.highlighted = Some(token);
                self.sink.play(token);
            }
            PlaybackEvent::Clear => {
                self.highlighted = None;
            }
            PlaybackEvent::Finished => {
                self.highlighted = None;
                if self.phase == Phase::Playing {
                    self.transition(Phase::AwaitingInput);
                }
            }
        }
        self.publish();
    }

    fn transition(&mut self, to: Phase) {
        if self.phase == to {
            return;
        }
        debug!(session = %self.id, from = %self.phase, %to, level = self.level, "phase transition");
        self.history.push(StateTransition {
            from: self.phase,
            to,
            timestamp: Utc::now(),
            level: self.level,
        });
        self.phase = to;
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        if self.last_published.as_ref() == Some(&snapshot) {
            return;
        }
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
        self.last_published = Some(snapshot);
    }
}
