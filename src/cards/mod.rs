//! Cards and hands.
//!
//! - `card`: `Card`, `Rank`, `Suit` and the value order
//! - `hand`: the sorted per-agent `Hand`

pub mod card;
pub mod hand;

pub use card::{Card, Rank, Suit, DECK_SIZE, OPENING_CARD};
pub use hand::Hand;
