//! Agent identification and per-agent data storage.
//!
//! ## AgentId
//!
//! Stable integer identifier for one seat at the table, 0-based.
//! Rendered 1-based ("Agent 1") in transcripts.
//!
//! ## AgentMap
//!
//! Per-agent data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `AgentId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::MAX_PLAYERS;

/// Agent identifier.
///
/// Agent indices are 0-based: the first agent is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The agent after this one in a cyclic turn order of `agent_count` seats.
    #[must_use]
    pub fn next(self, agent_count: usize) -> Self {
        Self(((self.index() + 1) % agent_count) as u8)
    }

    /// Iterate over all agent IDs for a table of `agent_count` agents.
    ///
    /// ```
    /// use rust_shedding::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(4).collect();
    /// assert_eq!(agents.len(), 4);
    /// assert_eq!(agents[0], AgentId::new(0));
    /// assert_eq!(agents[3], AgentId::new(3));
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count as u8).map(AgentId)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.index() + 1)
    }
}

/// Per-agent data storage with O(1) access.
///
/// Use `AgentMap::new()` to create with a factory function,
/// or `AgentMap::with_value()` to initialize all entries to the same value.
///
/// ```
/// use rust_shedding::core::{AgentId, AgentMap};
///
/// let mut passes: AgentMap<u32> = AgentMap::with_value(3, 0);
/// passes[AgentId::new(1)] += 1;
/// assert_eq!(passes[AgentId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentMap<T> {
    data: Vec<T>,
}

impl<T> AgentMap<T> {
    /// Create a new AgentMap with values from a factory function.
    pub fn new(agent_count: usize, factory: impl Fn(AgentId) -> T) -> Self {
        assert!(agent_count > 0, "Must have at least 1 agent");
        assert!(agent_count <= MAX_PLAYERS, "At most {MAX_PLAYERS} agents supported");

        let data = AgentId::all(agent_count).map(factory).collect();

        Self { data }
    }

    /// Create a new AgentMap with all entries set to the same value.
    pub fn with_value(agent_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(agent_count, |_| value.clone())
    }

    /// Create a new AgentMap with default values.
    pub fn with_default(agent_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(agent_count, |_| T::default())
    }

    /// Build from one value per agent, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 agent");
        assert!(data.len() <= MAX_PLAYERS, "At most {MAX_PLAYERS} agents supported");
        Self { data }
    }

    /// Get the number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }
}

impl<T> Index<AgentId> for AgentMap<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        &self.data[agent.index()]
    }
}

impl<T> IndexMut<AgentId> for AgentMap<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        &mut self.data[agent.index()]
    }
}
