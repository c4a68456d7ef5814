//! Game configuration.
//!
//! The rule parameters a table can vary: the token set, the value range,
//! the hand size, the number of opponents and the number of rounds.
//! Everything else about the rules is fixed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::error::ConfigError;
use super::player::MAX_PLAYERS;
use crate::cards::Token;

/// Largest magnitude a configured base value may have.
pub const MAX_CARD_VALUE: i64 = 1_000_000;

/// Largest deck a config may ask for.
pub const MAX_DECK_SIZE: usize = 100_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Token set; every token gets one card per value.
    pub tokens: Vec<Token>,

    /// Lowest base value (inclusive).
    pub min_value: i64,

    /// Highest base value (inclusive).
    pub max_value: i64,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Number of computer-controlled players.
    pub opponents: usize,

    /// Rounds per game. Each round consumes one card per player.
    pub total_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tokens: vec![Token::from("X"), Token::from("O"), Token::from("^")],
            min_value: 1,
            max_value: 8,
            hand_size: 6,
            opponents: 3,
            total_rounds: 4,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the token set.
    #[must_use]
    pub fn with_tokens<T: Into<Token>>(mut self, tokens: impl IntoIterator<Item = T>) -> Self {
        self.tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the inclusive base value range.
    #[must_use]
    pub fn with_values(mut self, values: RangeInclusive<i64>) -> Self {
        self.min_value = *values.start();
        self.max_value = *values.end();
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the number of opponents.
    #[must_use]
    pub fn with_opponents(mut self, opponents: usize) -> Self {
        self.opponents = opponents;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Human plus opponents.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.opponents.saturating_add(1)
    }

    /// Base values every token is paired with.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }

    /// Number of cards in a full deck, saturating at `usize::MAX`.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        if self.min_value > self.max_value {
            return 0;
        }
        let per_token = self
            .max_value
            .checked_sub(self.min_value)
            .and_then(|width| width.checked_add(1))
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(usize::MAX);
        self.tokens.len().saturating_mul(per_token)
    }

    /// Check that a game with this config can be dealt and played through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for token in &self.tokens {
            if !seen.insert(token) {
                return Err(ConfigError::DuplicateToken(token.clone()));
            }
        }
        if self.tokens.len() < 2 {
            return Err(ConfigError::NotEnoughTokens(self.tokens.len()));
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::EmptyValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.min_value < -MAX_CARD_VALUE || self.max_value > MAX_CARD_VALUE {
            return Err(ConfigError::ValueRangeTooLarge {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHandSize);
        }
        if self.opponents == 0 {
            return Err(ConfigError::NoOpponents);
        }
        if self.player_count() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.player_count()));
        }

        let available = self.deck_size();
        if available > MAX_DECK_SIZE {
            return Err(ConfigError::DeckTooLarge(available));
        }
        let needed = self.player_count().saturating_mul(self.hand_size);
        if needed > available {
            return Err(ConfigError::DeckTooSmall { needed, available });
        }
        if self.total_rounds as usize > self.hand_size {
            return Err(ConfigError::TooManyRounds {
                rounds: self.total_rounds,
                hand_size: self.hand_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.player_count(), 4);
        assert_eq!(config.deck_size(), 24);
        assert_eq!(config.values(), 1..=8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_helpers() {
        let config = GameConfig::default()
            .with_tokens(["A", "B"])
            .with_values(2..=5)
            .with_hand_size(3)
            .with_opponents(1)
            .with_total_rounds(2);

        assert_eq!(config.tokens, vec![Token::from("A"), Token::from("B")]);
        assert_eq!(config.deck_size(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_token_rejected() {
        let config = GameConfig::default().with_tokens(["X"]);
        assert_eq!(config.validate(), Err(ConfigError::NotEnoughTokens(1)));
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let config = GameConfig::default().with_tokens(["X", "O", "X"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateToken(Token::from("X")))
        );
    }

    #[test]
    fn test_empty_value_range_rejected() {
        let mut config = GameConfig::default();
        config.min_value = 5;
        config.max_value = 4;

        assert_eq!(config.deck_size(), 0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyValueRange { min: 5, max: 4 })
        );
    }

    #[test]
    fn test_extreme_value_range_rejected() {
        let err = GameConfig::from_json(
            r#"{"min_value": -9223372036854775808, "max_value": 9223372036854775807}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::ValueRangeTooLarge {
                min: i64::MIN,
                max: i64::MAX
            }
        );
        let config = GameConfig::default().with_values(i64::MIN..=i64::MAX);
        assert_eq!(config.deck_size(), usize::MAX);
    }

    #[test]
    fn test_oversized_deck_rejected() {
        let config = GameConfig::default().with_values(-MAX_CARD_VALUE..=MAX_CARD_VALUE);

        assert_eq!(
            config.validate(),
            Err(ConfigError::DeckTooLarge(3 * (2 * MAX_CARD_VALUE as usize + 1)))
        );
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let config = GameConfig::default()
            .with_opponents(usize::MAX)
            .with_hand_size(usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyPlayers(usize::MAX))
        );

        let config = GameConfig::default().with_hand_size(usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeckTooSmall {
                needed: usize::MAX,
                available: 24
            })
        );
    }

    #[test]
    fn test_deck_too_small_rejected() {
        let config = GameConfig::default().with_hand_size(7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeckTooSmall {
                needed: 28,
                available: 24
            })
        );
    }

    #[test]
    fn test_more_rounds_than_cards_rejected() {
        let config = GameConfig::default().with_total_rounds(7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyRounds {
                rounds: 7,
                hand_size: 6
            })
        );
    }

    #[test]
    fn test_no_opponents_rejected() {
        let config = GameConfig::default().with_opponents(0);
        assert_eq!(config.validate(), Err(ConfigError::NoOpponents));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"tokens": ["+", "-", "*", "/"], "total_rounds": 5}"#)
            .unwrap();

        assert_eq!(config.tokens.len(), 4);
        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.max_value, 8);
    }

    #[test]
    fn test_from_json_validates() {
        let err = GameConfig::from_json(r#"{"tokens": ["X"]}"#).unwrap_err();
        assert_eq!(err, ConfigError::NotEnoughTokens(1));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
