//! Session configuration.
//!
//! Hosts configure a session at startup:
//! - Deck shape (`pair_count`, `alphabet`)
//! - Timing (`reveal_pause`, `mismatch_hide`)
//! - Scoring (`match_points`)
//! - Determinism (`seed`)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{default_alphabet, DeckBuilder, Symbol, DEFAULT_PAIR_COUNT};
use crate::error::{ConfigError, Result};

/// Delay between the second flip and resolving the pair.
pub const DEFAULT_REVEAL_PAUSE: Duration = Duration::from_millis(500);

/// Delay between a confirmed mismatch and hiding both cards again.
pub const DEFAULT_MISMATCH_HIDE: Duration = Duration::from_millis(1000);

/// Points awarded per matched pair.
pub const DEFAULT_MATCH_POINTS: u32 = 10;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pairs per deck.
    pub pair_count: usize,

    /// Symbols to draw from. The first `pair_count` are used.
    pub alphabet: Vec<Symbol>,

    /// Pause after the second card is revealed, before resolution.
    pub reveal_pause: Duration,

    /// Pause after a mismatch before both cards turn face-down.
    pub mismatch_hide: Duration,

    /// Score added for each matched pair.
    pub match_points: u32,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            alphabet: default_alphabet(),
            reveal_pause: DEFAULT_REVEAL_PAUSE,
            mismatch_hide: DEFAULT_MISMATCH_HIDE,
            match_points: DEFAULT_MATCH_POINTS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Default configuration: 8 pairs, 500ms reveal, 1000ms hide, 10 points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Replace the symbol alphabet.
    #[must_use]
    pub fn with_alphabet<I, S>(mut self, alphabet: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet = alphabet.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reveal pause.
    #[must_use]
    pub fn with_reveal_pause(mut self, pause: Duration) -> Self {
        self.reveal_pause = pause;
        self
    }

    /// Set the mismatch-hide delay.
    #[must_use]
    pub fn with_mismatch_hide(mut self, delay: Duration) -> Self {
        self.mismatch_hide = delay;
        self
    }

    /// Set points per match.
    #[must_use]
    pub fn with_match_points(mut self, points: u32) -> Self {
        self.match_points = points;
        self
    }

    /// Fix the RNG seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration and produce the deck recipe.
    pub fn deck_builder(&self) -> Result<DeckBuilder> {
        if self.match_points == 0 {
            return Err(ConfigError::ZeroMatchPoints);
        }
        Ok(DeckBuilder::new(self.pair_count, &self.alphabet)?)
    }

    /// Check the configuration without keeping the recipe.
    pub fn validate(&self) -> Result<()> {
        self.deck_builder().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckError;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();

        assert_eq!(config.pair_count, 8);
        assert_eq!(config.alphabet.len(), 12);
        assert_eq!(config.reveal_pause, Duration::from_millis(500));
        assert_eq!(config.mismatch_hide, Duration::from_millis(1000));
        assert_eq!(config.match_points, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_pair_count(2)
            .with_alphabet(["A", "B"])
            .with_reveal_pause(Duration::from_millis(10))
            .with_mismatch_hide(Duration::from_millis(20))
            .with_match_points(5)
            .with_seed(7);

        assert_eq!(config.pair_count, 2);
        assert_eq!(config.alphabet, vec![Symbol::new("A"), Symbol::new("B")]);
        assert_eq!(config.reveal_pause, Duration::from_millis(10));
        assert_eq!(config.mismatch_hide, Duration::from_millis(20));
        assert_eq!(config.match_points, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.deck_builder().unwrap().pair_count(), 2);
    }

    #[test]
    fn test_validate_small_alphabet() {
        let config = SessionConfig::new().with_alphabet(["A", "B"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Deck(DeckError::AlphabetTooSmall { required: 8, available: 2 }))
        );
    }

    #[test]
    fn test_validate_zero_points() {
        let config = SessionConfig::new().with_match_points(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMatchPoints));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"pair_count": 6, "seed": 3}"#).unwrap();

        assert_eq!(config.pair_count, 6);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.match_points, DEFAULT_MATCH_POINTS);
        assert_eq!(config.alphabet, default_alphabet());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SessionConfig::new().with_seed(11).with_pair_count(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
