//! Cards, hands and the deck.
//!
//! ## Key Types
//!
//! - `Token`: a card's category label
//! - `Card`: immutable token + base value, with buff-aware valuation
//! - `Hand`: a player's cards grouped by token
//! - `Deck`: every token x value card, shuffled and dealt round-robin

pub mod card;
pub mod deck;
pub mod hand;
pub mod token;

pub use card::{Card, BUFF_BONUS};
pub use deck::Deck;
pub use hand::Hand;
pub use token::Token;
