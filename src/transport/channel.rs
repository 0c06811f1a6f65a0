//! Duplex channel between the arbiter and one agent.
//!
//! Each direction is a bounded tokio mpsc queue of capacity 1: at most one
//! request and one response are ever in flight. Dropping either end closes
//! the channel, which the other side observes as `None` / `ChannelClosed`.

use tokio::sync::mpsc;

use super::message::{Request, Response};
use crate::core::AgentId;
use crate::error::TransportError;

/// Create the two ends of an agent's channel.
#[must_use]
pub fn duplex(agent: AgentId) -> (ArbiterEnd, AgentEnd) {
    let (request_tx, request_rx) = mpsc::channel(1);
    let (response_tx, response_rx) = mpsc::channel(1);

    (
        ArbiterEnd {
            agent,
            requests: request_tx,
            responses: response_rx,
        },
        AgentEnd {
            agent,
            requests: request_rx,
            responses: response_tx,
        },
    )
}

/// The arbiter's side of an agent's channel.
#[derive(Debug)]
pub struct ArbiterEnd {
    agent: AgentId,
    requests: mpsc::Sender<Request>,
    responses: mpsc::Receiver<Response>,
}

impl ArbiterEnd {
    #[must_use]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Send one request and wait for its response.
    ///
    /// Fails with `ChannelClosed` if the agent has gone away on either leg.
    pub async fn exchange(&mut self, request: Request) -> Result<Response, TransportError> {
        self.requests
            .send(request)
            .await
            .map_err(|_| TransportError::ChannelClosed(self.agent))?;
        self.responses
            .recv()
            .await
            .ok_or(TransportError::ChannelClosed(self.agent))
    }
}

/// The agent's side of its channel.
#[derive(Debug)]
pub struct AgentEnd {
    agent: AgentId,
    requests: mpsc::Receiver<Request>,
    responses: mpsc::Sender<Response>,
}

impl AgentEnd {
    #[must_use]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Wait for the next request. `None` once the arbiter has hung up.
    pub async fn recv(&mut self) -> Option<Request> {
        self.requests.recv().await
    }

    /// Answer the request just received.
    pub async fn respond(&self, response: Response) -> Result<(), TransportError> {
        self.responses
            .send(response)
            .await
            .map_err(|_| TransportError::ChannelClosed(self.agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::OPENING_CARD;

    #[tokio::test]
    async fn test_exchange_round_trip() {
        let (mut arbiter, mut agent) = duplex(AgentId::new(2));

        let echo = tokio::spawn(async move {
            let request = agent.recv().await.unwrap();
            assert_eq!(request, Request::Open);
            agent.respond(Response::played(OPENING_CARD)).await.unwrap();
        });

        let response = arbiter.exchange(Request::Open).await.unwrap();
        assert_eq!(response, Response::played(OPENING_CARD));
        echo.await.unwrap();
    }

    #[tokio::test]
    async fn test_dropped_agent_end_closes_channel() {
        let (mut arbiter, agent) = duplex(AgentId::new(0));
        drop(agent);

        assert_eq!(
            arbiter.exchange(Request::Lead).await,
            Err(TransportError::ChannelClosed(AgentId::new(0)))
        );
    }

    #[tokio::test]
    async fn test_agent_exits_without_answering() {
        let (mut arbiter, mut agent) = duplex(AgentId::new(1));

        let quitter = tokio::spawn(async move {
            let _ = agent.recv().await;
        });

        assert_eq!(
            arbiter.exchange(Request::Lead).await,
            Err(TransportError::ChannelClosed(AgentId::new(1)))
        );
        quitter.await.unwrap();
    }

    #[tokio::test]
    async fn test_dropped_arbiter_end_ends_requests() {
        let (arbiter, mut agent) = duplex(AgentId::new(0));
        drop(arbiter);

        assert!(agent.recv().await.is_none());
        assert!(agent.respond(Response::Pass).await.is_err());
    }
}
