//! Turn and trick bookkeeping, owned by the arbiter alone.
//!
//! ## Turn order
//!
//! Seats are visited cyclically in id order: `0, 1, .., N-1, 0, ..`.
//! Completed agents stay in the cycle but are skipped.
//!
//! ## Trick reset
//!
//! A trick resets exactly when the pass counter reaches `active - 1`:
//! every other active agent has passed since the last play. The highest
//! card is cleared, the counter returns to 0 and the turn goes back to the
//! trick leader, who then leads.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{AgentId, AgentMap};
use crate::transport::Request;

/// Global game state. Mutated once per arbiter step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    agent_count: usize,
    /// Agent whose turn it is (possibly completed, until skipped).
    turn: AgentId,
    /// Last agent to play a card.
    leader: AgentId,
    /// Card to beat, `None` at the start of a trick.
    highest: Option<Card>,
    /// Consecutive passes since the last play.
    passes: usize,
    completed: AgentMap<bool>,
    active: usize,
    /// Agents in the order they emptied their hands. First is the winner.
    completion_order: Vec<AgentId>,
    /// Agents whose channel closed without an answer.
    exited: Vec<AgentId>,
    opened: bool,
    moves: u32,
    tricks: u32,
}

impl GameState {
    /// Fresh state with `opener` to move first.
    #[must_use]
    pub fn new(agent_count: usize, opener: AgentId) -> Self {
        assert!(opener.index() < agent_count, "Opener must be seated");

        Self {
            agent_count,
            turn: opener,
            leader: opener,
            highest: None,
            passes: 0,
            completed: AgentMap::with_value(agent_count, false),
            active: agent_count,
            completion_order: Vec::new(),
            exited: Vec::new(),
            opened: false,
            moves: 0,
            tricks: 1,
        }
    }

    // === Turn Selection ===

    /// Advance past completed agents and return the agent to move.
    ///
    /// Panics if no agent is active.
    pub fn seek_active(&mut self) -> AgentId {
        assert!(self.active > 0, "No active agent left");
        while self.completed[self.turn] {
            self.turn = self.turn.next(self.agent_count);
        }
        self.turn
    }

    /// The request for the agent to move, counting it as a move.
    ///
    /// `Open` for the very first move, `Beat` while a trick is running,
    /// `Lead` otherwise.
    pub fn next_request(&mut self) -> Request {
        self.moves += 1;
        if !self.opened {
            self.opened = true;
            return Request::Open;
        }
        match self.highest {
            Some(card) if self.passes + 1 < self.active => Request::Beat(card),
            _ => Request::Lead,
        }
    }

    /// Move the turn to the next seat.
    pub fn advance(&mut self) {
        self.turn = self.turn.next(self.agent_count);
    }

    // === Response Bookkeeping ===

    /// A card was played: it becomes the card to beat.
    pub fn record_play(&mut self, agent: AgentId, card: Card) {
        self.highest = Some(card);
        self.leader = agent;
        self.passes = 0;
    }

    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    /// The agent emptied its hand. Returns `true` if it is the winner.
    pub fn record_completion(&mut self, agent: AgentId) -> bool {
        if self.completed[agent] {
            return false;
        }
        self.retire(agent);
        self.completion_order.push(agent);
        self.completion_order.len() == 1
    }

    /// The agent's channel closed. It leaves play without a placing.
    pub fn record_exit(&mut self, agent: AgentId) {
        if !self.completed[agent] {
            self.retire(agent);
            self.exited.push(agent);
        }
    }

    fn retire(&mut self, agent: AgentId) {
        self.completed[agent] = true;
        self.active -= 1;
    }

    /// Reset the trick if every other active agent has passed.
    ///
    /// Returns the leader of the new trick when a reset happened.
    pub fn check_reset(&mut self) -> Option<AgentId> {
        if self.active == 0 || self.passes != self.active - 1 {
            return None;
        }
        self.highest = None;
        self.passes = 0;
        self.turn = self.leader;
        self.tricks += 1;
        Some(self.leader)
    }

    // === Queries ===

    /// The game ends once a single agent is left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.active <= 1
    }

    /// The agent left holding cards, once the game is over.
    #[must_use]
    pub fn loser(&self) -> Option<AgentId> {
        if !self.is_over() {
            return None;
        }
        self.completed.iter().find(|(_, done)| !**done).map(|(agent, _)| agent)
    }

    #[must_use]
    pub fn winner(&self) -> Option<AgentId> {
        self.completion_order.first().copied()
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    #[must_use]
    pub fn turn(&self) -> AgentId {
        self.turn
    }

    #[must_use]
    pub fn leader(&self) -> AgentId {
        self.leader
    }

    #[must_use]
    pub fn highest(&self) -> Option<Card> {
        self.highest
    }

    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_completed(&self, agent: AgentId) -> bool {
        self.completed[agent]
    }

    #[must_use]
    pub fn completion_order(&self) -> &[AgentId] {
        &self.completion_order
    }

    #[must_use]
    pub fn exited(&self) -> &[AgentId] {
        &self.exited
    }

    /// Requests sent so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Tricks started so far, counting the opening one.
    #[must_use]
    pub fn tricks(&self) -> u32 {
        self.tricks
    }
}
