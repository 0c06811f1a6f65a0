//! Error types.
//!
//! - `ConfigError`: fatal, raised before any agent is started.
//! - `TransportError`: a closed channel; the arbiter recovers from it.
//! - `GameError`: everything that aborts a game.

use thiserror::Error;

use crate::cards::Card;
use crate::core::AgentId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number of players {0}: must be between 1 and 52")]
    InvalidPlayerCount(usize),

    #[error("invalid card token `{0}`")]
    InvalidCard(String),

    #[error("not enough distinct cards: {cards} cards for {players} players")]
    InsufficientCards { cards: usize, players: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    #[error("channel to {0} is closed")]
    ChannelClosed(AgentId),
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no agent holds the opening card {0}")]
    NoOpeningCard(Card),

    #[error("protocol violation by {agent}: {detail}")]
    ProtocolViolation { agent: AgentId, detail: String },
}
