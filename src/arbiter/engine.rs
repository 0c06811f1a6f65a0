//! The arbiter loop.
//!
//! One request is in flight at a time: the arbiter sends to the agent to
//! move, waits for that agent's single response, updates [`GameState`],
//! and only then picks the next agent. The loop ends when one agent is
//! left; that agent is the loser.

use tracing::{debug, info, warn};

use super::event::{GameEvent, GameRecord};
use super::state::GameState;
use crate::cards::OPENING_CARD;
use crate::core::{AgentId, AgentMap};
use crate::error::GameError;
use crate::transport::{ArbiterEnd, Request, Response};

/// Drives a game over one channel per agent.
pub struct Arbiter {
    links: AgentMap<ArbiterEnd>,
    state: GameState,
    events: Vec<GameEvent>,
}

impl Arbiter {
    /// Seat the arbiter in front of `links` (one per agent, in seat order)
    /// with `opener` holding the opening card.
    #[must_use]
    pub fn new(links: AgentMap<ArbiterEnd>, opener: AgentId) -> Self {
        let state = GameState::new(links.agent_count(), opener);
        Self {
            links,
            state,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play the game to the end.
    ///
    /// Every channel end is dropped on return, closing all channels.
    /// A protocol violation aborts the game.
    pub async fn run(mut self) -> Result<GameRecord, GameError> {
        info!(agents = self.state.agent_count(), opener = %self.state.turn(), "game started");

        while !self.state.is_over() {
            self.step().await?;
        }

        if let Some(loser) = self.state.loser() {
            info!(agent = %loser, "loser");
            self.events.push(GameEvent::Loser { agent: loser });
        }
        self.events.push(GameEvent::Finished);
        info!(
            moves = self.state.moves(),
            tricks = self.state.tricks(),
            "game completed"
        );

        Ok(GameRecord {
            events: self.events,
            completion_order: self.state.completion_order().to_vec(),
            winner: self.state.winner(),
            loser: self.state.loser(),
            exited: self.state.exited().to_vec(),
            moves: self.state.moves(),
            tricks: self.state.tricks(),
        })
    }

    /// One request, one response, one state update.
    async fn step(&mut self) -> Result<(), GameError> {
        let agent = self.state.seek_active();
        let request = self.state.next_request();
        debug!(%agent, %request, "sending request");

        match self.links[agent].exchange(request).await {
            Err(err) => {
                warn!(%agent, %err, "agent left without answering");
                self.state.record_exit(agent);
                self.events.push(GameEvent::Exited { agent });
            }
            Ok(response) => {
                check_response(agent, request, response)?;
                self.apply(agent, response);
            }
        }

        self.state.advance();
        if !self.state.is_over() {
            if let Some(leader) = self.state.check_reset() {
                info!(%leader, "everyone passed, trick reset");
                self.events.push(GameEvent::TrickReset { leader });
            }
        }
        Ok(())
    }

    fn apply(&mut self, agent: AgentId, response: Response) {
        match response {
            Response::Played { card, .. } => {
                debug!(%agent, %card, "plays");
                self.state.record_play(agent, card);
                self.events.push(GameEvent::Played { agent, card });
            }
            Response::Pass => {
                debug!(%agent, "passes");
                self.state.record_pass();
                self.events.push(GameEvent::Passed { agent });
            }
            Response::Complete => {}
        }

        if response.is_complete() {
            let winner = self.state.record_completion(agent);
            let place = self.state.completion_order().len();
            debug!(%agent, place, "completes");
            self.events.push(GameEvent::Completed { agent, place });
            if winner {
                info!(%agent, "winner");
                self.events.push(GameEvent::Winner { agent });
            }
        }
    }
}

/// Reject responses no correct agent could give to `request`.
fn check_response(agent: AgentId, request: Request, response: Response) -> Result<(), GameError> {
    let violation = |detail: String| Err(GameError::ProtocolViolation { agent, detail });

    match (request, response) {
        (Request::Open | Request::Lead, Response::Pass) => violation(format!("passed on {request}")),
        (Request::Open, Response::Played { card, .. }) if card != OPENING_CARD => {
            violation(format!("opened with {card} instead of {OPENING_CARD}"))
        }
        (Request::Beat(reference), Response::Played { card, .. }) if !card.beats(reference) => {
            violation(format!("played {card}, which does not beat {reference}"))
        }
        _ => Ok(()),
    }
}
