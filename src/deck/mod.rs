//! Deck preparation: token input, dedupe, optional shuffle, round-robin deal.

pub mod deal;
pub mod input;

pub use deal::Deal;
pub use input::{read_tokens, tokenize};
