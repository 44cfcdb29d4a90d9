//! Console Simon Says
//!
//! Plays the game in a terminal: the sequence is printed one color at a time,
//! then you type it back, one color per line.
//!
//! Commands:
//! - a color name (red, green, blue, yellow, orange, purple, pink, cyan)
//! - `next` after a completed round
//! - `start` to begin again
//! - `quit`
//!
//! Run with: RUST_LOG=simon=debug cargo run --example console

use simon::{
    ChoiceOutcome, ColorToken, GameConfig, GameSessionBuilder, Phase, PlaybackSink,
    RandomTokens, SessionSnapshot,
};
use std::io::{self, BufRead, Write};
use std::thread;

struct TerminalSink;

impl PlaybackSink for TerminalSink {
    fn play(&mut self, token: ColorToken) {
        println!("  >> {:<7} ({} / {}.wav)", token, token.image_key(), token.audio_key());
    }

    fn input_feedback(&mut self, token: ColorToken) {
        println!("  .. {token}");
    }
}

fn render(snapshot: &SessionSnapshot) {
    if snapshot.accepts_input() {
        if snapshot.input_len == 0 {
            println!(
                "Your turn: repeat {} color(s). Level {} | Score {}",
                snapshot.remaining(),
                snapshot.level,
                snapshot.score
            );
        }
        return;
    }
    if !snapshot.phase.awaits_decision() {
        return;
    }

    match snapshot.phase {
        Phase::Success => println!("Well done! Type `next` for level {}.", snapshot.level + 1),
        Phase::GameOver => println!(
            "Game over at level {} with score {}. Type `start` to play again.",
            snapshot.level, snapshot.score
        ),
        _ => {}
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut session = GameSessionBuilder::new()
        .config(GameConfig::default())
        .sink(TerminalSink)
        .tokens(RandomTokens::from_entropy())
        .observer(render)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    println!("=== Simon Says ===\n");
    session.start();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        // Input is locked while playback runs, so block on the timer instead.
        while let Some(wait) = session.time_until_next_event() {
            thread::sleep(wait);
            session.advance(wait);
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "start" => {
                session.start();
            }
            "next" => {
                if session.advance_level().is_none() {
                    println!("Nothing to advance right now.");
                }
            }
            other => match other.parse::<ColorToken>() {
                Ok(token) => match session.submit_choice(token) {
                    ChoiceOutcome::Mismatch { expected, got } => {
                        println!("Expected {expected}, got {got}.");
                        println!(
                            "Rounds played this game: {}",
                            session.history().entries_into(&Phase::Playing)
                        );
                    }
                    ChoiceOutcome::Ignored { phase } => {
                        println!("Input ignored while {phase}.");
                    }
                    _ => {}
                },
                Err(_) => println!("Unknown command: {other}"),
            },
        }
    }

    println!("\nFinal score: {}", session.score());
    Ok(())
}
