//! Round notifications.
//!
//! Observers are pure sinks: the round calls them at fixed points and never
//! looks at what they do.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, Token};
use crate::core::{PlayerId, PlayerMap};
use crate::players::Player;

/// Receives a round's progress.
pub trait RoundObserver {
    /// Before any card is chosen.
    fn report_round_state(&mut self, _players: &PlayerMap<Player>, _buff: &Token, _debuff: &Token) {}

    /// Once per player, in seat order, after every card has been collected.
    fn report_play(&mut self, _player: &Player, _card: &Card) {}

    /// Once per winner, after the points were added to `winner`'s score.
    fn report_round_result(&mut self, _winner: &Player, _points: i64) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RoundObserver for NullObserver {}

/// Emits each notification as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn report_round_state(&mut self, players: &PlayerMap<Player>, buff: &Token, debuff: &Token) {
        let scores: Vec<String> = players.values().map(ToString::to_string).collect();
        info!(%buff, %debuff, scores = ?scores, "round started");
    }

    fn report_play(&mut self, player: &Player, card: &Card) {
        info!(player = player.name(), %card, "card played");
    }

    fn report_round_result(&mut self, winner: &Player, points: i64) {
        info!(player = winner.name(), points, score = winner.score(), "points scored");
    }
}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    RoundStarted {
        buff: Token,
        debuff: Token,
        scores: Vec<(PlayerId, i64)>,
    },
    CardPlayed {
        player: PlayerId,
        card: Card,
    },
    PointsScored {
        player: PlayerId,
        points: i64,
        score: i64,
    },
}

/// Records every notification as a `RoundEvent`.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> impl Iterator<Item = RoundEvent> + '_ {
        self.events.drain(..)
    }
}

impl RoundObserver for EventLog {
    fn report_round_state(&mut self, players: &PlayerMap<Player>, buff: &Token, debuff: &Token) {
        self.events.push(RoundEvent::RoundStarted {
            buff: buff.clone(),
            debuff: debuff.clone(),
            scores: players.iter().map(|(id, p)| (id, p.score())).collect(),
        });
    }

    fn report_play(&mut self, player: &Player, card: &Card) {
        self.events.push(RoundEvent::CardPlayed {
            player: player.id(),
            card: card.clone(),
        });
    }

    fn report_round_result(&mut self, winner: &Player, points: i64) {
        self.events.push(RoundEvent::PointsScored {
            player: winner.id(),
            points,
            score: winner.score(),
        });
    }
}
