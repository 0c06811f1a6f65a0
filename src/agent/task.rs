//! Running an agent as its own tokio task.

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::player::Agent;
use crate::cards::Card;
use crate::core::AgentId;
use crate::transport::AgentEnd;

/// What an agent task hands back when it exits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReport {
    pub agent: AgentId,
    /// Cards still in hand, lowest first. Empty for every finisher.
    pub remaining: Vec<Card>,
}

impl Agent {
    /// Serve requests until the hand is empty or the arbiter hangs up.
    ///
    /// The channel end is dropped on return, closing it.
    pub async fn run(mut self, mut end: AgentEnd) -> AgentReport {
        while let Some(request) = end.recv().await {
            let response = self.respond(request);
            debug!(agent = %self.id(), %request, %response, "answered request");

            if let Err(err) = end.respond(response).await {
                warn!(agent = %self.id(), %err, "arbiter gone before response was delivered");
                break;
            }
            if self.is_done() {
                debug!(agent = %self.id(), "hand empty, leaving the table");
                break;
            }
        }

        AgentReport {
            agent: self.id(),
            remaining: self.hand().to_vec(),
        }
    }

    /// Spawn [`Agent::run`] on the current runtime.
    pub fn spawn(self, end: AgentEnd) -> JoinHandle<AgentReport> {
        tokio::spawn(self.run(end))
    }
}
