//! Color tokens and the sources that generate them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One signal in the fixed palette the player must recall.
///
/// Parses from its lowercase name, ignoring ASCII case.
///
/// ```rust
/// use simon::ColorToken;
///
/// let token: ColorToken = "Purple".parse().unwrap();
/// assert_eq!(token, ColorToken::Purple);
/// assert_eq!(token.to_string(), "purple");
/// assert_eq!(token.image_key(), "panda");
/// ```
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorToken {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Pink,
    Cyan,
}

impl ColorToken {
    /// Lowercase color name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Key of the animal image drawn on this token's button.
    pub fn image_key(self) -> &'static str {
        match self {
            Self::Red => "fox",
            Self::Green => "zebra",
            Self::Blue => "monkey",
            Self::Yellow => "tiger",
            Self::Orange => "giraffe",
            Self::Purple => "panda",
            Self::Pink => "elephant",
            Self::Cyan => "lion",
        }
    }

    /// Key of the sound cue played with this token.
    pub fn audio_key(self) -> &'static str {
        self.name()
    }
}

/// Supplier of the tokens appended to a sequence.
pub trait TokenSource {
    fn next_token(&mut self) -> ColorToken;
}

/// Uniform draw with replacement over the full palette.
#[derive(Debug, Clone)]
pub struct RandomTokens<R> {
    rng: R,
}

impl<R: Rng> RandomTokens<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTokens<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TokenSource for RandomTokens<R> {
    fn next_token(&mut self) -> ColorToken {
        let index = self.rng.gen_range(0..ColorToken::COUNT);
        ColorToken::iter().nth(index).unwrap_or(ColorToken::Red)
    }
}

/// Plays back a fixed script of tokens, wrapping around when exhausted.
///
/// An empty script yields [`ColorToken::Red`] forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTokens {
    script: Vec<ColorToken>,
    cursor: usize,
}

impl ScriptedTokens {
    pub fn new(script: impl IntoIterator<Item = ColorToken>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl TokenSource for ScriptedTokens {
    fn next_token(&mut self) -> ColorToken {
        if self.script.is_empty() {
            return ColorToken::Red;
        }
        let token = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        token
    }
}
