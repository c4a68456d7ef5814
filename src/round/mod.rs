//! Round resolution.
//!
//! A `Round` draws its buff and debuff, collects one card from every player,
//! resolves the winner(s) and applies the debuff penalty:
//!
//! - Winner: highest adjusted value; a buff card wins an exact tie against a
//!   non-buff card, any other exact tie produces several winners.
//! - Penalty: each winner loses `DEBUFF_PENALTY` per debuffer other than
//!   themself, floored at zero points.

pub mod observer;
pub mod outcome;
pub mod resolve;
#[allow(clippy::module_inception)]
pub mod round;

pub use observer::{EventLog, NullObserver, RoundEvent, RoundObserver, TracingObserver};
pub use outcome::{PlayedCard, RoundOutcome, WinnerScore};
pub use resolve::{
    compare_cards, debuffers, resolve_round, score_winner, winning_plays, DEBUFF_PENALTY,
};
pub use round::{Round, RoundPhase};
