//! Card value object.

use serde::{Deserialize, Serialize};

use super::token::Token;

/// Bonus added to a card whose token is the round's buff.
pub const BUFF_BONUS: i64 = 2;

/// An immutable token + base value pair.
///
/// ```
/// use buff_or_debuff::cards::{Card, Token};
///
/// let card = Card::new("X", 5);
/// assert_eq!(card.adjusted_value(&Token::from("X")), 7);
/// assert_eq!(card.adjusted_value(&Token::from("O")), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    token: Token,
    base_value: i64,
}

impl Card {
    #[must_use]
    pub fn new(token: impl Into<Token>, base_value: i64) -> Self {
        Self {
            token: token.into(),
            base_value,
        }
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[must_use]
    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    /// Whether this card carries `token`.
    #[must_use]
    pub fn is_token(&self, token: &Token) -> bool {
        self.token == *token
    }

    /// Base value, plus `BUFF_BONUS` when this card carries the buff token.
    #[must_use]
    pub fn adjusted_value(&self, buff: &Token) -> i64 {
        if self.is_token(buff) {
            self.base_value.saturating_add(BUFF_BONUS)
        } else {
            self.base_value
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.token, self.base_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_value_buffed() {
        let card = Card::new("X", 5);
        assert_eq!(card.adjusted_value(&Token::from("X")), 7);
    }

    #[test]
    fn test_adjusted_value_not_buffed() {
        let card = Card::new("O", 6);
        assert_eq!(card.adjusted_value(&Token::from("X")), 6);
        assert_eq!(card.adjusted_value(&Token::from("^")), 6);
    }

    #[test]
    fn test_adjusted_value_saturates() {
        let card = Card::new("X", i64::MAX - 1);
        assert_eq!(card.adjusted_value(&Token::from("X")), i64::MAX);
    }

    #[test]
    fn test_accessors_and_display() {
        let card = Card::new("^", 3);
        assert_eq!(card.token(), &Token::from("^"));
        assert_eq!(card.base_value(), 3);
        assert!(card.is_token(&Token::from("^")));
        assert!(!card.is_token(&Token::from("X")));
        assert_eq!(card.to_string(), "^ 3");
    }
}
