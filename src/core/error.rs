//! Error types for configuration and play.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Token;

/// A `GameConfig` that cannot produce a playable game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least two distinct tokens are required, got {0}")]
    NotEnoughTokens(usize),
    #[error("token {0} is listed more than once")]
    DuplicateToken(Token),
    #[error("value range {min}..={max} is empty")]
    EmptyValueRange { min: i64, max: i64 },
    #[error("value range {min}..={max} is outside the supported card values")]
    ValueRangeTooLarge { min: i64, max: i64 },
    #[error("a deck of {0} cards is larger than supported")]
    DeckTooLarge(usize),
    #[error("hand size must be at least 1")]
    EmptyHandSize,
    #[error("at least one opponent is required")]
    NoOpponents,
    #[error("{0} players exceed the table limit of 255")]
    TooManyPlayers(usize),
    #[error("deck of {available} cards cannot deal {needed}")]
    DeckTooSmall { needed: usize, available: usize },
    #[error("{rounds} rounds need more cards than a hand of {hand_size}")]
    TooManyRounds { rounds: u32, hand_size: usize },
    #[error("malformed config: {0}")]
    Parse(String),
}

/// Failures while playing a round or a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} has no cards left to play")]
    EmptyHand(PlayerId),
    #[error("card choice {index} is out of range for a hand of {len}")]
    InvalidChoice { index: usize, len: usize },
    #[error("human input closed before a card was chosen")]
    InputClosed,
    #[error("buff and debuff must differ, both were {0}")]
    SameBuffAndDebuff(Token),
    #[error("at least two distinct tokens are required to draw buff and debuff, got {0}")]
    NotEnoughTokens(usize),
    #[error("round has already been played")]
    RoundAlreadyPlayed,
    #[error("all {0} rounds have been played")]
    GameOver(u32),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::EmptyHand(PlayerId::new(2)).to_string(),
            "Player 2 has no cards left to play"
        );
        assert_eq!(
            GameError::InvalidChoice { index: 6, len: 3 }.to_string(),
            "card choice 6 is out of range for a hand of 3"
        );
        assert_eq!(
            GameError::SameBuffAndDebuff(Token::from("X")).to_string(),
            "buff and debuff must differ, both were X"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: GameError = ConfigError::NoOpponents.into();
        assert_eq!(err, GameError::Config(ConfigError::NoOpponents));
        assert_eq!(err.to_string(), "at least one opponent is required");
    }
}
