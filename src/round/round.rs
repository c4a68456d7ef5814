//! One round of play.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::observer::RoundObserver;
use super::outcome::{PlayedCard, RoundOutcome};
use super::resolve::resolve_round;
use crate::cards::Token;
use crate::core::{GameError, GameRng, PlayerMap};
use crate::players::{HumanInput, Player};

/// Where a round is in its lifecycle. Rounds only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Buff and debuff drawn, no card chosen yet.
    Setup,
    /// Players are choosing cards in seat order.
    Collecting,
    /// Finding the winner(s).
    Resolving,
    /// Adding points to winners.
    Scoring,
    /// Finished; the round cannot be played again.
    Done,
}

/// A single round: its buff and debuff tokens and its progress.
#[derive(Clone, Debug)]
pub struct Round {
    buff: Token,
    debuff: Token,
    phase: RoundPhase,
}

impl Round {
    /// Draw buff and debuff at random from `tokens`.
    ///
    /// The debuff is re-drawn until it differs from the buff, so `tokens`
    /// must hold at least two distinct labels.
    pub fn draw(tokens: &[Token], rng: &mut GameRng) -> Result<Self, GameError> {
        let buff = rng
            .choose(tokens)
            .cloned()
            .ok_or(GameError::NotEnoughTokens(0))?;
        if tokens.iter().all(|token| *token == buff) {
            return Err(GameError::NotEnoughTokens(1));
        }

        let debuff = loop {
            if let Some(candidate) = rng.choose(tokens) {
                if *candidate != buff {
                    break candidate.clone();
                }
            }
        };

        debug!(%buff, %debuff, "drew round tokens");
        Ok(Self::new_unchecked(buff, debuff))
    }

    /// A round with fixed tokens.
    pub fn with_tokens(buff: impl Into<Token>, debuff: impl Into<Token>) -> Result<Self, GameError> {
        let buff = buff.into();
        let debuff = debuff.into();
        if buff == debuff {
            return Err(GameError::SameBuffAndDebuff(buff));
        }
        Ok(Self::new_unchecked(buff, debuff))
    }

    fn new_unchecked(buff: Token, debuff: Token) -> Self {
        Self {
            buff,
            debuff,
            phase: RoundPhase::Setup,
        }
    }

    #[must_use]
    pub fn buff(&self) -> &Token {
        &self.buff
    }

    #[must_use]
    pub fn debuff(&self) -> &Token {
        &self.debuff
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Play the round through: collect one card per player in seat order,
    /// resolve the winners and add their points.
    ///
    /// Human players block on `input`; AI players decide immediately. Plays
    /// are reported to `observer` only after every card is down. If any
    /// seat fails to choose, no hand changes and the round can be retried.
    pub fn play(
        &mut self,
        players: &mut PlayerMap<Player>,
        rng: &mut GameRng,
        input: &mut dyn HumanInput,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundOutcome, GameError> {
        if self.phase != RoundPhase::Setup {
            return Err(GameError::RoundAlreadyPlayed);
        }
        observer.report_round_state(players, &self.buff, &self.debuff);

        // No card leaves a hand until every seat has chosen.
        self.phase = RoundPhase::Collecting;
        let mut choices = Vec::with_capacity(players.player_count());
        for (_, player) in players.iter() {
            match player.choose_card(&self.buff, &self.debuff, rng, input) {
                Ok(index) => choices.push(index),
                Err(err) => {
                    self.phase = RoundPhase::Setup;
                    return Err(err);
                }
            }
        }
        let mut played = Vec::with_capacity(choices.len());
        for ((id, player), index) in players.iter_mut().zip(choices) {
            played.push(PlayedCard::new(id, player.take_card(index)?));
        }
        for play in &played {
            observer.report_play(&players[play.player], &play.card);
        }

        self.phase = RoundPhase::Resolving;
        let outcome = resolve_round(&self.buff, &self.debuff, played);

        self.phase = RoundPhase::Scoring;
        for winner in &outcome.winners {
            let player = &mut players[winner.player];
            player.add_points(winner.points);
            observer.report_round_result(player, winner.points);
        }

        self.phase = RoundPhase::Done;
        info!(
            buff = %self.buff,
            debuff = %self.debuff,
            winners = ?outcome.winner_ids().collect::<Vec<_>>(),
            debuffers = outcome.debuffers.len(),
            "round resolved"
        );
        Ok(outcome)
    }
}
