//! Deck construction and dealing.

use tracing::debug;

use super::card::Card;
use super::hand::Hand;
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap};

/// Undealt cards, top of the deck first.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// One card for every token and value in the config, unshuffled.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let cards = config
            .tokens
            .iter()
            .flat_map(|token| config.values().map(move |value| Card::new(token.clone(), value)))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal one card at a time around the table until every seat holds
    /// `hand_size` cards. Undealt cards stay in the deck.
    pub fn deal(
        &mut self,
        player_count: usize,
        hand_size: usize,
    ) -> Result<PlayerMap<Hand>, ConfigError> {
        let needed = player_count * hand_size;
        if needed > self.cards.len() {
            return Err(ConfigError::DeckTooSmall {
                needed,
                available: self.cards.len(),
            });
        }

        let mut hands: PlayerMap<Hand> = PlayerMap::new(player_count, |_| Hand::new());
        for (i, card) in self.cards.drain(..needed).enumerate() {
            hands[PlayerId::new((i % player_count) as u8)].add(card);
        }
        debug!(
            players = player_count,
            hand_size,
            remaining = self.cards.len(),
            "dealt hands"
        );
        Ok(hands)
    }
}
