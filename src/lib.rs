//! # buff-or-debuff
//!
//! Engine for a small trick-taking card game. Every card carries a token
//! (`X`, `O`, `^` by default) and a value. Each round draws a buff token,
//! which adds 2 to matching cards, and a different debuff token, which costs
//! the winner 2 points for every other player who played it.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through an explicitly passed,
//!    seeded `GameRng`. The same seed replays the same game.
//!
//! 2. **N-Player**: tables hold one human seat plus any number of opponents;
//!    nothing assumes a fixed player count.
//!
//! 3. **No I/O in the core**: human choices arrive through `HumanInput`,
//!    progress leaves through `RoundObserver`.
//!
//! ## Modules
//!
//! - `core`: player IDs, RNG, configuration, errors
//! - `cards`: tokens, cards, hands, the deck
//! - `players`: players, strategies, card policies, human input
//! - `round`: one round's draw, collection, resolution and scoring
//! - `game`: table setup and the round loop

pub mod cards;
pub mod core;
pub mod game;
pub mod players;
pub mod round;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameError, GameRng, PlayerId, PlayerMap};

pub use crate::cards::{Card, Deck, Hand, Token};

pub use crate::players::{
    CardPolicy, HeuristicPolicy, HumanInput, Player, RandomPolicy, ScriptedInput, Strategy,
};

pub use crate::round::{
    EventLog, NullObserver, Round, RoundEvent, RoundObserver, RoundOutcome, RoundPhase,
    TracingObserver, DEBUFF_PENALTY,
};

pub use crate::game::{Game, GameBuilder, Standing};
