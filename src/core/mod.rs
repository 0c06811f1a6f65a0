//! Core types shared by every component: agent identity, configuration, RNG.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{AgentId, AgentMap};
pub use rng::GameRng;
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
