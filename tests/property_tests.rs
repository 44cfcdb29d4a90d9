//! Property-based tests for the game session.
//!
//! These tests use proptest to verify progression and input-locking
//! properties across many generated sequences and inputs.

use proptest::prelude::*;
use simon::config::GameConfig;
use simon::core::State;
use simon::playback::{plan, PlaybackEvent, RecordingSink};
use simon::{ChoiceOutcome, ColorToken, GameSession, Phase, RoundId, ScriptedTokens};
use std::time::Duration;
use strum::IntoEnumIterator;

type Session = GameSession<RecordingSink, ScriptedTokens>;

prop_compose! {
    fn arbitrary_token()(
        token in prop::sample::select(ColorToken::iter().collect::<Vec<_>>())
    ) -> ColorToken {
        token
    }
}

fn scripted(script: &[ColorToken]) -> Session {
    GameSession::new(
        GameConfig::default(),
        RecordingSink::new(),
        ScriptedTokens::new(script.iter().copied()),
    )
    .unwrap()
}

/// Replays the sequence back correctly, leaving the session in `Success`.
fn play_round_correctly(session: &mut Session) {
    session.complete_playback();
    let sequence = session.sequence().to_vec();
    for token in sequence {
        session.submit_choice(token);
    }
}

fn any_other(token: ColorToken, offset: usize) -> ColorToken {
    let palette: Vec<ColorToken> = ColorToken::iter().collect();
    let index = palette.iter().position(|t| *t == token).unwrap_or(0);
    palette[(index + 1 + offset % 7) % palette.len()]
}

proptest! {
    #[test]
    fn each_completed_round_adds_exactly_one(
        script in prop::collection::vec(arbitrary_token(), 1..12)
    ) {
        let rounds = script.len();
        let mut session = scripted(&script);
        session.start();

        for round in 1..=rounds {
            prop_assert_eq!(session.level() as usize, round);
            prop_assert_eq!(session.sequence().len(), round);
            prop_assert_eq!(session.score() as usize, round - 1);

            play_round_correctly(&mut session);
            prop_assert_eq!(session.phase(), Phase::Success);
            prop_assert_eq!(session.score() as usize, round);

            if round < rounds {
                prop_assert!(session.advance_level().is_some());
            }
        }

        prop_assert_eq!(session.sequence(), &script[..]);
    }

    #[test]
    fn input_during_playback_is_inert(
        script in prop::collection::vec(arbitrary_token(), 1..6),
        presses in prop::collection::vec(arbitrary_token(), 0..20),
        partial_ms in 0u64..2500,
    ) {
        let mut session = scripted(&script);
        session.start();
        session.advance(Duration::from_millis(partial_ms));
        prop_assume!(session.phase() == Phase::Playing);

        let before = (session.snapshot(), session.sequence().to_vec(), session.user_input().to_vec());
        for token in presses {
            prop_assert_eq!(
                session.submit_choice(token),
                ChoiceOutcome::Ignored { phase: Phase::Playing }
            );
        }
        let after = (session.snapshot(), session.sequence().to_vec(), session.user_input().to_vec());
        prop_assert_eq!(before, after);
    }

    #[test]
    fn wrong_token_ends_game_and_freezes(
        script in prop::collection::vec(arbitrary_token(), 2..8),
        correct_prefix in 0usize..8,
        offset in 0usize..7,
    ) {
        let mut session = scripted(&script);
        session.start();
        for _ in 1..script.len() {
            play_round_correctly(&mut session);
            session.advance_level();
        }
        session.complete_playback();

        let sequence = session.sequence().to_vec();
        let prefix = correct_prefix % sequence.len();
        for token in &sequence[..prefix] {
            session.submit_choice(*token);
        }
        let expected = sequence[prefix];
        let wrong = any_other(expected, offset);

        prop_assert_eq!(
            session.submit_choice(wrong),
            ChoiceOutcome::Mismatch { expected, got: wrong }
        );
        prop_assert_eq!(session.phase(), Phase::GameOver);
        prop_assert!(session.phase().is_final());

        let frozen_score = session.score();
        session.submit_choice(expected);
        session.advance_level();
        session.advance(Duration::from_secs(30));
        prop_assert_eq!(session.score(), frozen_score);
        prop_assert_eq!(session.sequence(), &sequence[..]);
        prop_assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn start_always_yields_fresh_game(
        script in prop::collection::vec(arbitrary_token(), 1..6),
        rounds_before in 0usize..4,
    ) {
        let mut session = scripted(&script);
        session.start();
        for _ in 0..rounds_before {
            play_round_correctly(&mut session);
            session.advance_level();
        }

        session.start();
        prop_assert_eq!(session.level(), 1);
        prop_assert_eq!(session.score(), 0);
        prop_assert_eq!(session.sequence().len(), 1);
        prop_assert!(session.user_input().is_empty());
        prop_assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn playback_plan_is_strictly_alternating(
        sequence in prop::collection::vec(arbitrary_token(), 0..10),
        step_ms in 1u64..2000,
        highlight_pct in 1u64..=100,
        lead_in_ms in 0u64..2000,
    ) {
        let config = GameConfig {
            lead_in_ms,
            step_ms,
            highlight_ms: (step_ms * highlight_pct / 100).max(1),
        };
        let tasks = plan(RoundId::default().next(), &sequence, &config);

        prop_assert_eq!(tasks.len(), sequence.len() * 2 + 1);
        for pair in tasks.windows(2) {
            prop_assert!(pair[0].due <= pair[1].due);
        }
        for (i, token) in sequence.iter().enumerate() {
            prop_assert_eq!(tasks[2 * i].event, PlaybackEvent::Highlight(*token));
            prop_assert_eq!(tasks[2 * i + 1].event, PlaybackEvent::Clear);
        }
        prop_assert_eq!(tasks.last().map(|t| t.event), Some(PlaybackEvent::Finished));
    }

    #[test]
    fn playback_plays_every_token_once(
        script in prop::collection::vec(arbitrary_token(), 1..6),
    ) {
        let mut session = scripted(&script);
        session.start();
        for _ in 1..script.len() {
            play_round_correctly(&mut session);
            session.advance_level();
        }
        let already_played = session.sink().played.len();

        while let Some(wait) = session.time_until_next_event() {
            session.advance(wait);
        }

        prop_assert_eq!(&session.sink().played[already_played..], session.sequence());
        prop_assert_eq!(session.phase(), Phase::AwaitingInput);
        prop_assert_eq!(session.highlighted(), None);
    }
}
