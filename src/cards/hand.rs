//! A player's hand, grouped by token.
//!
//! Cards are kept in token buckets. Buckets appear in the order their token
//! was first dealt and cards inside a bucket keep deal order. The flattened
//! view (bucket by bucket) is what a human sees and what card indices refer
//! to everywhere in the crate.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::token::Token;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct TokenBucket {
    token: Token,
    cards: Vec<Card>,
}

/// Cards owned by one player until they are played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    buckets: Vec<TokenBucket>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of its token's bucket.
    pub fn add(&mut self, card: Card) {
        match self.buckets.iter_mut().find(|b| b.token == *card.token()) {
            Some(bucket) => bucket.cards.push(card),
            None => self.buckets.push(TokenBucket {
                token: card.token().clone(),
                cards: vec![card],
            }),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.cards.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Cards in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.buckets.iter().flat_map(|b| b.cards.iter())
    }

    /// Cards in flattened order, paired with their index.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.iter().enumerate()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.iter().nth(index)
    }

    /// The bucket for `token`, empty if the hand holds none.
    #[must_use]
    pub fn cards_of(&self, token: &Token) -> &[Card] {
        self.buckets
            .iter()
            .find(|b| b.token == *token)
            .map(|b| b.cards.as_slice())
            .unwrap_or(&[])
    }

    /// Tokens currently held, in bucket order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.buckets.iter().map(|b| &b.token)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards_of(card.token()).contains(card)
    }

    /// Snapshot of the flattened hand.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().cloned().collect()
    }

    /// Remove and return the card at flattened `index`.
    ///
    /// A bucket left empty is dropped, so `tokens()` only lists tokens the
    /// player can still play.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        let mut offset = index;
        let bucket_index = self.buckets.iter().position(|b| {
            if offset < b.cards.len() {
                true
            } else {
                offset -= b.cards.len();
                false
            }
        })?;

        let bucket = &mut self.buckets[bucket_index];
        let card = bucket.cards.remove(offset);
        if bucket.cards.is_empty() {
            self.buckets.remove(bucket_index);
        }
        Some(card)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.add(card);
        }
        hand
    }
}
