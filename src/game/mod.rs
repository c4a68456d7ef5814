//! Game driver.
//!
//! Builds a table (one human plus AI opponents), deals from a shuffled deck
//! and plays a fixed number of rounds. The driver holds no rules of its own;
//! everything that decides a round lives in `round` and `players`.

#[allow(clippy::module_inception)]
pub mod game;

pub use game::{Game, GameBuilder, Standing};
