//! Core engine types: players, RNG, configuration, errors.
//!
//! Nothing in here knows about buff or debuff rules; the `cards`, `players`
//! and `round` modules build the game on top of these pieces.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_CARD_VALUE, MAX_DECK_SIZE};
pub use error::{ConfigError, GameError};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
