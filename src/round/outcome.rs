//! What a resolved round produced.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Token};
use crate::core::PlayerId;

/// A card after it left its owner's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub player: PlayerId,
    pub card: Card,
}

impl PlayedCard {
    #[must_use]
    pub fn new(player: PlayerId, card: Card) -> Self {
        Self { player, card }
    }
}

/// Points awarded to one winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerScore {
    pub player: PlayerId,
    pub card: Card,
    /// The winning card's adjusted value.
    pub raw: i64,
    /// Debuffers counted against this winner (never the winner itself).
    pub debuffer_count: usize,
    pub penalty: i64,
    /// `max(raw - penalty, 0)`.
    pub points: i64,
}

/// Full record of a round, in play order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub buff: Token,
    pub debuff: Token,
    pub played: Vec<PlayedCard>,
    pub debuffers: SmallVec<[PlayerId; 4]>,
    /// More than one entry on an exact tie.
    pub winners: Vec<WinnerScore>,
}

impl RoundOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.iter().any(|w| w.player == player)
    }

    /// Points a player earned this round (0 unless they won).
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> i64 {
        self.winners
            .iter()
            .filter(|w| w.player == player)
            .map(|w| w.points)
            .sum()
    }

    /// Winning players in play order.
    pub fn winner_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.winners.iter().map(|w| w.player)
    }

    /// The card a player put down, if they played.
    #[must_use]
    pub fn card_of(&self, player: PlayerId) -> Option<&Card> {
        self.played
            .iter()
            .find(|p| p.player == player)
            .map(|p| &p.card)
    }
}
