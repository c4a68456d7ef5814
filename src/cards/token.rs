//! Card tokens.

use serde::{Deserialize, Serialize};

/// A card's category label, e.g. `X`, `O` or `^`.
///
/// Tokens carry no meaning of their own; each round picks one to buff and
/// another to debuff.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The token's label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Token {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
