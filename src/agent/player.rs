//! The player agent's strategy and state machine.
//!
//! ```text
//! WAITING --request--> (answer) --hand not empty--> WAITING
//!                             \--hand empty------> DONE
//! ```
//!
//! The strategy is always the minimal legal move:
//! - `Open`: the opening card if held, otherwise the lowest card
//! - `Lead`: the lowest card
//! - `Beat(r)`: the lowest card above `r`, or pass
//!
//! An agent with an empty hand answers any request with `Complete`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Hand, OPENING_CARD};
use crate::core::AgentId;
use crate::transport::{Request, Response};

/// Lifecycle of an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    /// Holds a hand and waits for the next request.
    Waiting,
    /// Hand emptied. Terminal.
    Done,
}

/// One participant: a private hand plus the strategy that plays it.
#[derive(Clone, Debug)]
pub struct Agent {
    id: AgentId,
    hand: Hand,
    state: AgentState,
}

impl Agent {
    #[must_use]
    pub fn new(id: AgentId, hand: Hand) -> Self {
        Self {
            id,
            hand,
            state: AgentState::Waiting,
        }
    }

    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == AgentState::Done
    }

    /// Answer one request, updating the hand.
    ///
    /// A `Done` agent keeps answering `Complete` without touching its hand.
    pub fn respond(&mut self, request: Request) -> Response {
        if self.is_done() {
            return Response::Complete;
        }
        if self.hand.is_empty() {
            self.state = AgentState::Done;
            return Response::Complete;
        }

        let choice = match request {
            Request::Open if self.hand.contains(OPENING_CARD) => Some(OPENING_CARD),
            Request::Open | Request::Lead => self.hand.lowest(),
            Request::Beat(reference) => self.hand.lowest_above(reference),
        };

        match choice {
            Some(card) => self.play(card),
            None => Response::Pass,
        }
    }

    fn play(&mut self, card: Card) -> Response {
        self.hand.remove(card);
        if self.hand.is_empty() {
            self.state = AgentState::Done;
            Response::played_last(card)
        } else {
            Response::played(card)
        }
    }
}
