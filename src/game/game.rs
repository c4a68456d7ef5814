//! Game setup and the round loop.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::players::{HumanInput, Player, Strategy};
use crate::round::{Round, RoundObserver, RoundOutcome};

/// One line of the final scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    deck: Deck,
    rng: GameRng,
    seed: u64,
    rounds_played: u32,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    player_name: String,
    config: GameConfig,
    autoplay: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            config: GameConfig::default(),
            autoplay: false,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn total_rounds(mut self, rounds: u32) -> Self {
        self.config.total_rounds = rounds;
        self
    }

    /// Seat 0 plays with the heuristic instead of asking for input.
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Seat the players, shuffle and deal.
    ///
    /// Each opponent is independently a heuristic player ("(Smart)") or a
    /// random one, with equal odds. Dealing, opponent setup and the rounds
    /// draw from separate streams of the seed.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.config.validate()?;

        let root = GameRng::new(seed);
        let mut deal_rng = root.for_context("deal");
        let mut seat_rng = root.for_context("opponents");

        let mut deck = Deck::from_config(&self.config);
        deck.shuffle(&mut deal_rng);
        let hands = deck.deal(self.config.player_count(), self.config.hand_size)?;

        let human_strategy = if self.autoplay {
            Strategy::HeuristicAi
        } else {
            Strategy::Human
        };
        let players: Vec<Player> = hands
            .into_entries()
            .map(|(id, hand)| {
                let player = if id.index() == 0 {
                    Player::new(id, self.player_name.clone(), human_strategy)
                } else if seat_rng.gen_bool(0.5) {
                    Player::new(id, format!("Opponent {} (Smart)", id.index()), Strategy::HeuristicAi)
                } else {
                    Player::new(id, format!("Opponent {}", id.index()), Strategy::RandomAi)
                };
                player.with_hand(hand)
            })
            .collect();

        info!(
            seed,
            players = players.len(),
            rounds = self.config.total_rounds,
            "game created"
        );

        Ok(Game {
            players: PlayerMap::from_vec(players),
            rng: root.for_context("rounds"),
            config: self.config,
            deck,
            seed,
            rounds_played: 0,
        })
    }
}

impl Game {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Seat 0.
    #[must_use]
    pub fn human(&self) -> &Player {
        &self.players[PlayerId::new(0)]
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cards that were never dealt.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.config.total_rounds.saturating_sub(self.rounds_played)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rounds_remaining() == 0
    }

    /// Play the next round.
    pub fn play_round(
        &mut self,
        input: &mut dyn HumanInput,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver(self.config.total_rounds));
        }

        let mut round = Round::draw(&self.config.tokens, &mut self.rng)?;
        debug!(round = self.rounds_played + 1, "starting round");
        let outcome = round.play(&mut self.players, &mut self.rng, input, observer)?;
        self.rounds_played += 1;
        Ok(outcome)
    }

    /// Play every remaining round and return the standings.
    pub fn play(
        &mut self,
        input: &mut dyn HumanInput,
        observer: &mut dyn RoundObserver,
    ) -> Result<Vec<Standing>, GameError> {
        while !self.is_finished() {
            self.play_round(input, observer)?;
        }
        let standings = self.standings();
        info!(
            leader = standings.first().map(|s| s.name.as_str()),
            "game finished"
        );
        Ok(standings)
    }

    /// Players by score, highest first; equal scores keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|(id, player)| Standing {
                player: id,
                name: player.name().to_string(),
                score: player.score(),
            })
            .collect();
        standings.sort_by_key(|s| Reverse(s.score));
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;
    use crate::players::ScriptedInput;
    use crate::round::NullObserver;

    #[test]
    fn test_game_creation() {
        let game = GameBuilder::new().player_name("Ada").build(42).unwrap();

        assert_eq!(game.players().player_count(), 4);
        assert_eq!(game.human().name(), "Ada");
        assert!(game.human().is_human());
        assert_eq!(game.deck().len(), 0);
        assert_eq!(game.rounds_remaining(), 4);
        for (id, player) in game.players().iter() {
            assert_eq!(player.hand().len(), 6);
            assert_eq!(player.score(), 0);
            if id.index() > 0 {
                assert!(!player.is_human());
                let smart = player.strategy() == Strategy::HeuristicAi;
                assert_eq!(player.name().ends_with("(Smart)"), smart);
                assert!(player.name().starts_with(&format!("Opponent {}", id.index())));
            }
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = GameBuilder::new()
            .config(GameConfig::default().with_opponents(0))
            .build(1)
            .unwrap_err();
        assert_eq!(err, GameError::Config(ConfigError::NoOpponents));
    }

    #[test]
    fn test_autoplay_game_runs_to_completion() {
        let mut game = GameBuilder::new().autoplay(true).build(7).unwrap();

        let standings = game
            .play(&mut ScriptedInput::default(), &mut NullObserver)
            .unwrap();

        assert!(game.is_finished());
        assert_eq!(game.rounds_played(), 4);
        assert_eq!(standings.len(), 4);
        assert!(standings.windows(2).all(|w| w[0].score >= w[1].score));
        for (_, player) in game.players().iter() {
            assert_eq!(player.hand().len(), 2);
        }
    }

    #[test]
    fn test_play_round_after_last_round() {
        let mut game = GameBuilder::new().autoplay(true).total_rounds(1).build(7).unwrap();
        game.play_round(&mut ScriptedInput::default(), &mut NullObserver)
            .unwrap();

        let err = game
            .play_round(&mut ScriptedInput::default(), &mut NullObserver)
            .unwrap_err();

        assert_eq!(err, GameError::GameOver(1));
    }

    #[test]
    fn test_human_without_input_stops_game() {
        let mut game = GameBuilder::new().build(3).unwrap();

        let err = game
            .play_round(&mut ScriptedInput::default(), &mut NullObserver)
            .unwrap_err();

        assert_eq!(err, GameError::InputClosed);
        assert_eq!(game.rounds_played(), 0);
    }
}
