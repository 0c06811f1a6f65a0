//! Player agents.
//!
//! - `player`: the `Agent` state machine and its minimal-move strategy
//! - `task`: serving the agent's channel from a tokio task

pub mod player;
pub mod task;

pub use player::{Agent, AgentState};
pub use task::AgentReport;
