//! Protocol messages.
//!
//! The arbiter sends a [`Request`]; the agent answers with exactly one
//! [`Response`]. A final play and completion travel together as
//! `Response::Played { complete: true, .. }`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Arbiter → agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// First move of the game: play the opening card.
    Open,
    /// Start a new trick with any card.
    Lead,
    /// Beat the reference card or pass.
    Beat(Card),
}

impl Request {
    /// The card to beat, for `Beat`.
    #[must_use]
    pub const fn reference(&self) -> Option<Card> {
        match self {
            Self::Beat(card) => Some(*card),
            Self::Open | Self::Lead => None,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Lead => write!(f, "LEAD"),
            Self::Beat(card) => write!(f, "BEAT {card}"),
        }
    }
}

/// Agent → arbiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// A card was played. `complete` is set when it was the last card.
    Played { card: Card, complete: bool },
    /// Nothing in hand beats the reference card.
    Pass,
    /// The hand was already empty.
    Complete,
}

impl Response {
    /// A play that leaves cards in hand.
    #[must_use]
    pub const fn played(card: Card) -> Self {
        Self::Played {
            card,
            complete: false,
        }
    }

    /// A play of the last card in hand.
    #[must_use]
    pub const fn played_last(card: Card) -> Self {
        Self::Played {
            card,
            complete: true,
        }
    }

    /// Card carried by this response, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Played { card, .. } => Some(*card),
            Self::Pass | Self::Complete => None,
        }
    }

    /// Does this response report an empty hand?
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete | Self::Played { complete: true, .. })
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Played { card, complete: false } => write!(f, "PLAYED {card}"),
            Self::Played { card, complete: true } => write!(f, "PLAYED {card} COMPLETE"),
            Self::Pass => write!(f, "PASS"),
            Self::Complete => write!(f, "COMPLETE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::OPENING_CARD;

    #[test]
    fn test_request_display() {
        assert_eq!(Request::Open.to_string(), "OPEN");
        assert_eq!(Request::Lead.to_string(), "LEAD");
        assert_eq!(Request::Beat(OPENING_CARD).to_string(), "BEAT D3");
        assert_eq!(Request::Beat(OPENING_CARD).reference(), Some(OPENING_CARD));
        assert_eq!(Request::Lead.reference(), None);
    }

    #[test]
    fn test_response_completion() {
        assert!(!Response::played(OPENING_CARD).is_complete());
        assert!(Response::played_last(OPENING_CARD).is_complete());
        assert!(Response::Complete.is_complete());
        assert!(!Response::Pass.is_complete());
        assert_eq!(Response::played_last(OPENING_CARD).card(), Some(OPENING_CARD));
        assert_eq!(Response::Complete.card(), None);
    }

    #[test]
    fn test_response_display() {
        assert_eq!(Response::played_last(OPENING_CARD).to_string(), "PLAYED D3 COMPLETE");
        assert_eq!(Response::Pass.to_string(), "PASS");
    }
}
