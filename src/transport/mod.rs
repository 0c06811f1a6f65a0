//! Transport between the arbiter and the agents.
//!
//! - `message`: typed requests and responses
//! - `channel`: one FIFO duplex channel per agent

pub mod message;
pub mod channel;

pub use message::{Request, Response};
pub use channel::{duplex, AgentEnd, ArbiterEnd};
