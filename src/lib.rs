//! # rust-shedding
//!
//! A shedding trick game ("play the lowest card; beat or pass") played by
//! N independent agents and coordinated by a single arbiter.
//!
//! ## Design Principles
//!
//! 1. **Agents Own Their Hands**: each agent runs on its own tokio task
//!    and is the only code that ever sees or mutates its hand.
//!
//! 2. **One Request In Flight**: the arbiter sends one request and waits
//!    for that agent's response before talking to anyone else, so the
//!    game state needs no locking.
//!
//! 3. **Typed Protocol**: requests (`Open`, `Lead`, `Beat`) and responses
//!    (`Played`, `Pass`, `Complete`) are enums. A response that no correct
//!    agent could give aborts the game as a protocol violation.
//!
//! ## Game Flow
//!
//! 1. Deal: dedupe the input cards and hand them out round-robin.
//! 2. The holder of the Three of Diamonds opens.
//! 3. Each agent in turn beats the highest card or passes; when everyone
//!    else has passed, the last player to play leads a new trick.
//! 4. The first agent to empty its hand wins; the last one holding cards
//!    loses.
//!
//! ## Modules
//!
//! - `core`: agent ids, configuration, RNG
//! - `cards`: cards, the value order, hands
//! - `deck`: token input and dealing
//! - `transport`: messages and per-agent duplex channels
//! - `agent`: the player agent state machine and its task
//! - `arbiter`: game state, the arbiter loop, events
//! - `transcript`: rendering events

pub mod core;
pub mod error;
pub mod cards;
pub mod deck;
pub mod transport;
pub mod agent;
pub mod arbiter;
pub mod transcript;

// Re-export commonly used types
pub use crate::core::{AgentId, AgentMap, GameConfig, GameRng};

pub use crate::error::{ConfigError, GameError, TransportError};

pub use crate::cards::{Card, Hand, Rank, Suit, OPENING_CARD};

pub use crate::deck::Deal;

pub use crate::transport::{duplex, AgentEnd, ArbiterEnd, Request, Response};

pub use crate::agent::{Agent, AgentReport, AgentState};

pub use crate::arbiter::{play, Arbiter, GameEvent, GameOutcome, GameRecord, GameState};
