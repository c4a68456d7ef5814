//! Players and how they choose cards.
//!
//! A `Player` owns its hand and score. Selection is a tagged `Strategy`:
//! humans go through a `HumanInput`, computer players through a
//! `CardPolicy` (`RandomPolicy` or `HeuristicPolicy`).

pub mod input;
pub mod player;
pub mod policy;

pub use input::{HumanInput, ScriptedInput};
pub use player::{Player, Strategy};
pub use policy::{CardPolicy, HeuristicPolicy, RandomPolicy};
