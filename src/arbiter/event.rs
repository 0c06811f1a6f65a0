//! Game events and the record of a finished game.
//!
//! Events are the only thing the core exposes to presentation: a
//! transcript renderer (see `crate::transcript`) or a JSON emitter turns
//! them into output. They are produced in the order things happened.

use serde::{Deserialize, Serialize};

use crate::agent::AgentReport;
use crate::cards::Card;
use crate::core::AgentId;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The input cards were shuffled with this seed before dealing.
    Shuffled { seed: u64 },
    /// A duplicated input card was thrown away.
    Discarded { card: Card },
    /// An agent was dealt its hand.
    Dealt { agent: AgentId, cards: Vec<Card> },
    Played { agent: AgentId, card: Card },
    Passed { agent: AgentId },
    /// Everyone else passed; `leader` starts the next trick.
    TrickReset { leader: AgentId },
    /// An agent emptied its hand. `place` is 1 for the first to finish.
    Completed { agent: AgentId, place: usize },
    Winner { agent: AgentId },
    /// An agent's channel closed without an answer.
    Exited { agent: AgentId },
    Loser { agent: AgentId },
    Finished,
}

impl GameEvent {
    /// The agent this event is about, if any.
    #[must_use]
    pub fn agent(&self) -> Option<AgentId> {
        match self {
            Self::Dealt { agent, .. }
            | Self::Played { agent, .. }
            | Self::Passed { agent }
            | Self::Completed { agent, .. }
            | Self::Winner { agent }
            | Self::Exited { agent }
            | Self::Loser { agent } => Some(*agent),
            Self::TrickReset { leader } => Some(*leader),
            Self::Shuffled { .. } | Self::Discarded { .. } | Self::Finished => None,
        }
    }
}

/// What the arbiter knows once the loop has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub events: Vec<GameEvent>,
    /// Agents in the order they emptied their hands.
    pub completion_order: Vec<AgentId>,
    pub winner: Option<AgentId>,
    pub loser: Option<AgentId>,
    /// Agents that left without answering.
    pub exited: Vec<AgentId>,
    /// Requests sent.
    pub moves: u32,
    /// Tricks played, counting the opening one.
    pub tricks: u32,
}

impl GameRecord {
    /// Cards played, in order.
    pub fn plays(&self) -> impl Iterator<Item = (AgentId, Card)> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Played { agent, card } => Some((*agent, *card)),
            _ => None,
        })
    }

    /// Number of trick resets.
    #[must_use]
    pub fn resets(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::TrickReset { .. }))
            .count()
    }
}

/// A finished game plus what every agent task reported on exit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub record: GameRecord,
    /// One report per joined agent task, in seat order.
    pub reports: Vec<AgentReport>,
}

impl GameOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<AgentId> {
        self.record.winner
    }

    #[must_use]
    pub fn loser(&self) -> Option<AgentId> {
        self.record.loser
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.record.events
    }

    /// Cards the agent still held when its task ended.
    #[must_use]
    pub fn remaining(&self, agent: AgentId) -> Option<&[Card]> {
        self.reports
            .iter()
            .find(|r| r.agent == agent)
            .map(|r| r.remaining.as_slice())
    }
}
