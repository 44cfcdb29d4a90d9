//! Side-effecting consumer of playback highlights.

use crate::token::ColorToken;

/// Capability that turns a token into its visual highlight and audio cue.
///
/// The session owns its sink, so tests can substitute a recorder for real
/// audio and rendering.
pub trait PlaybackSink {
    /// Called once per highlight event during playback.
    fn play(&mut self, token: ColorToken);

    /// Called when the player's choice is accepted. Defaults to nothing.
    fn input_feedback(&mut self, _token: ColorToken) {}
}

/// Sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl PlaybackSink for SilentSink {
    fn play(&mut self, _token: ColorToken) {}
}

/// Sink that remembers what it was asked to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub played: Vec<ColorToken>,
    pub feedback: Vec<ColorToken>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaybackSink for RecordingSink {
    fn play(&mut self, token: ColorToken) {
        self.played.push(token);
    }

    fn input_feedback(&mut self, token: ColorToken) {
        self.feedback.push(token);
    }
}

impl<S: PlaybackSink + ?Sized> PlaybackSink for Box<S> {
    fn play(&mut self, token: ColorToken) {
        (**self).play(token);
    }

    fn input_feedback(&mut self, token: ColorToken) {
        (**self).input_feedback(token);
    }
}
