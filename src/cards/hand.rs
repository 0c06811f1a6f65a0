//! An agent's private hand.
//!
//! Backed by `im::OrdSet`, so the cards are always held in value order and
//! both queries the strategy needs are cheap:
//! - `lowest()`: smallest card
//! - `lowest_above(card)`: smallest card strictly greater than `card`

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::Bound;

use super::card::Card;

/// A sorted set of cards with no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: OrdSet<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Returns `false` (and leaves the hand unchanged) if the
    /// card is already held.
    pub fn insert(&mut self, card: Card) -> bool {
        if self.cards.contains(&card) {
            return false;
        }
        self.cards.insert(card);
        true
    }

    /// Remove a specific card, if held.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        self.cards.remove(&card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Smallest card held.
    #[must_use]
    pub fn lowest(&self) -> Option<Card> {
        self.cards.get_min().copied()
    }

    /// Smallest card held whose value is strictly greater than `card`'s.
    #[must_use]
    pub fn lowest_above(&self, card: Card) -> Option<Card> {
        self.cards
            .range((Bound::Excluded(card), Bound::Unbounded))
            .next()
            .copied()
    }

    /// Cards in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Cards in ascending order, collected.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.insert(card);
        }
        hand
    }
}
