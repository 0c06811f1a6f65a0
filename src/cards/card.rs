//! Card model: ranks, suits and the total order used by every comparison.
//!
//! ## Ordering
//!
//! Rank is primary, low to high: `3 4 5 6 7 8 9 T J Q K A 2`.
//! Suit breaks ties, low to high: Diamonds, Clubs, Hearts, Spades.
//!
//! [`Card::value`] packs both into a single key in `0..52`, so two distinct
//! cards never share a value and `Ord` on `Card` is exactly the value order.
//!
//! ## Tokens
//!
//! A card is written as two characters, a suit letter and a rank character:
//! `D3`, `ST`, `HA`. Parsing also accepts rank-first (`3D`) and lowercase.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Card suit, declared in ascending tiebreak order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Token letter (D, C, H, S).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Parse a token letter, either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Position in the tiebreak order (0 = lowest).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }
}

/// Card rank, declared in ascending game order (the Two is highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Token character (3-9, T, J, Q, K, A, 2).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
        }
    }

    /// Parse a token character, either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.to_char() == c)
    }

    /// Position in the game order (0 = lowest).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }
}

/// A playing card. Immutable and `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The card that must be played first.
pub const OPENING_CARD: Card = Card::new(Rank::Three, Suit::Diamonds);

/// Number of distinct cards.
pub const DECK_SIZE: usize = 52;

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Ordering key in `0..52`: rank first, suit as tiebreak.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.order() * 4 + self.suit.order()
    }

    /// Is this the designated opening card?
    #[must_use]
    pub fn is_opening(self) -> bool {
        self == OPENING_CARD
    }

    /// Does this card beat `other`?
    #[must_use]
    pub fn beats(self, other: Card) -> bool {
        self.value() > other.value()
    }

    /// All 52 cards, lowest first.
    pub fn deck() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.to_char(), self.rank.to_char())
    }
}

impl FromStr for Card {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidCard(s.to_string());
        let mut chars = s.chars();
        let (a, b) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(invalid()),
        };

        match (Suit::from_char(a), Rank::from_char(b)) {
            (Some(suit), Some(rank)) => Ok(Card::new(rank, suit)),
            _ => match (Rank::from_char(a), Suit::from_char(b)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(invalid()),
            },
        }
    }
}

impl TryFrom<String> for Card {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_rank_dominates_suit() {
        assert!(card("D4") > card("S3"));
        assert!(card("D2") > card("SA"));
        assert!(card("CT") > card("H9"));
    }

    #[test]
    fn test_suit_breaks_ties() {
        assert!(card("D3") < card("C3"));
        assert!(card("C3") < card("H3"));
        assert!(card("H3") < card("S3"));
    }

    #[test]
    fn test_values_are_distinct_and_dense() {
        let values: Vec<u8> = Card::deck().map(Card::value).collect();
        assert_eq!(values, (0..DECK_SIZE as u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_opening_card_is_lowest() {
        assert_eq!(Card::deck().next(), Some(OPENING_CARD));
        assert!(OPENING_CARD.is_opening());
        assert_eq!(OPENING_CARD.value(), 0);
        assert_eq!(Card::deck().last(), Some(card("S2")));
    }

    #[test]
    fn test_parse_both_orders_and_case() {
        assert_eq!(card("D3"), OPENING_CARD);
        assert_eq!(card("3D"), OPENING_CARD);
        assert_eq!(card("d3"), OPENING_CARD);
        assert_eq!(card("st"), Card::new(Rank::Ten, Suit::Spades));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "D", "D10", "X3", "D1", "DD", "33", "D3 "] {
            assert_eq!(
                bad.parse::<Card>(),
                Err(ConfigError::InvalidCard(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_display_is_suit_first() {
        assert_eq!(card("3d").to_string(), "D3");
        assert_eq!(card("AH").to_string(), "HA");
    }

    #[test]
    fn test_beats() {
        assert!(card("H7").beats(card("C7")));
        assert!(!card("C7").beats(card("H7")));
        assert!(!card("C7").beats(card("C7")));
    }

    #[test]
    fn test_card_serde_as_token() {
        let json = serde_json::to_string(&card("SK")).unwrap();
        assert_eq!(json, "\"SK\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card("SK"));
        assert!(serde_json::from_str::<Card>("\"ZZ\"").is_err());
    }
}
