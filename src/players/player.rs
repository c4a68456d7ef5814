//! Players and their card selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::HumanInput;
use super::policy::{CardPolicy, HeuristicPolicy, RandomPolicy};
use crate::cards::{Card, Hand, Token};
use crate::core::{GameError, GameRng, PlayerId};

/// How a player picks the card to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Asks a `HumanInput`.
    Human,
    /// `RandomPolicy`.
    RandomAi,
    /// `HeuristicPolicy`.
    HeuristicAi,
}

impl Strategy {
    #[must_use]
    pub fn is_human(self) -> bool {
        matches!(self, Strategy::Human)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Human => "human",
            Strategy::RandomAi => "random",
            Strategy::HeuristicAi => "heuristic",
        }
    }
}

/// A seat at the table: hand, running score and selection strategy.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    strategy: Strategy,
    hand: Hand,
    score: i64,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            id,
            name: name.into(),
            strategy,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Replace the hand, e.g. with one dealt from a `Deck`.
    #[must_use]
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = hand;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.strategy.is_human()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Only the round's scoring step awards points, and never negative ones.
    pub(crate) fn add_points(&mut self, points: i64) {
        debug_assert!(points >= 0, "round points are floored at zero");
        self.score += points;
    }

    /// Decide which card to play without touching the hand.
    ///
    /// Returns an index into the flattened hand. A human's index is
    /// range-checked here even though the input side is expected to
    /// validate it already.
    pub fn choose_card(
        &self,
        buff: &Token,
        debuff: &Token,
        rng: &mut GameRng,
        input: &mut dyn HumanInput,
    ) -> Result<usize, GameError> {
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand(self.id));
        }

        let len = self.hand.len();
        let index = match self.strategy {
            Strategy::Human => input
                .request_card_choice(&self.hand.to_vec())
                .ok_or(GameError::InputClosed)?,
            Strategy::RandomAi => RandomPolicy
                .choose(&self.hand, buff, debuff, rng)
                .ok_or(GameError::EmptyHand(self.id))?,
            Strategy::HeuristicAi => HeuristicPolicy
                .choose(&self.hand, buff, debuff, rng)
                .ok_or(GameError::EmptyHand(self.id))?,
        };
        if index >= len {
            return Err(GameError::InvalidChoice { index, len });
        }
        Ok(index)
    }

    /// Take the card at a flattened `index` out of the hand.
    pub fn take_card(&mut self, index: usize) -> Result<Card, GameError> {
        let len = self.hand.len();
        let card = self
            .hand
            .take(index)
            .ok_or(GameError::InvalidChoice { index, len })?;
        debug!(
            player = %self.id,
            strategy = self.strategy.as_str(),
            %card,
            "played card"
        );
        Ok(card)
    }

    /// Pick this round's card and take it out of the hand.
    ///
    /// The returned card is no longer in the hand; ownership passes to the
    /// caller. On error the hand is unchanged.
    pub fn select_card(
        &mut self,
        buff: &Token,
        debuff: &Token,
        rng: &mut GameRng,
        input: &mut dyn HumanInput,
    ) -> Result<Card, GameError> {
        let index = self.choose_card(buff, debuff, rng, input)?;
        self.take_card(index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}
