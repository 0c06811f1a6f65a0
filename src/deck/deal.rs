//! Deck preparation: dedupe the input cards and deal them round-robin.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, Hand, OPENING_CARD};
use crate::core::{AgentId, AgentMap, GameConfig, GameRng, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{ConfigError, GameError};

/// The result of dealing: one disjoint hand per agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    hands: AgentMap<Hand>,
    /// Duplicate input cards, in the order they were rejected.
    discarded: Vec<Card>,
    /// Seed used to shuffle the input, if it was shuffled.
    seed: Option<u64>,
}

impl Deal {
    /// Deal `cards` round-robin into `player_count` hands.
    ///
    /// A card equal to one already accepted is discarded and reported in
    /// [`Deal::discarded`]. The i-th accepted card goes to agent `i % N`.
    ///
    /// ```
    /// use rust_shedding::cards::Card;
    /// use rust_shedding::core::AgentId;
    /// use rust_shedding::deck::Deal;
    ///
    /// let cards = ["D3", "C4", "D3", "H5"].map(|t| t.parse::<Card>().unwrap());
    /// let deal = Deal::prepare(cards, 2).unwrap();
    /// assert_eq!(deal.hand(AgentId::new(0)).len(), 2);
    /// assert_eq!(deal.hand(AgentId::new(1)).len(), 1);
    /// assert_eq!(deal.discarded().len(), 1);
    /// ```
    pub fn prepare(
        cards: impl IntoIterator<Item = Card>,
        player_count: usize,
    ) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::InvalidPlayerCount(player_count));
        }

        let mut hands: AgentMap<Hand> = AgentMap::with_default(player_count);
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        let mut discarded = Vec::new();

        for card in cards {
            if !seen.insert(card) {
                debug!(%card, "duplicated card discarded");
                discarded.push(card);
                continue;
            }
            let agent = AgentId::new(((seen.len() - 1) % player_count) as u8);
            hands[agent].insert(card);
        }

        if seen.len() < player_count {
            return Err(ConfigError::InsufficientCards {
                cards: seen.len(),
                players: player_count,
            });
        }

        Ok(Self {
            hands,
            discarded,
            seed: None,
        })
    }

    /// Parse tokens, shuffle them if configured, and deal.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        let seed = if config.shuffle {
            let mut rng = match config.seed {
                Some(seed) => GameRng::new(seed),
                None => GameRng::from_entropy(),
            };
            rng.shuffle(&mut cards);
            info!(seed = rng.seed(), "shuffled input cards");
            Some(rng.seed())
        } else {
            None
        };

        let mut deal = Self::prepare(cards, config.player_count)?;
        deal.seed = seed;
        Ok(deal)
    }

    /// Wrap hands that were dealt elsewhere.
    ///
    /// No distinctness check is made across hands; callers own that.
    #[must_use]
    pub fn from_hands(hands: AgentMap<Hand>) -> Self {
        Self {
            hands,
            discarded: Vec::new(),
            seed: None,
        }
    }

    /// The agent holding the opening card.
    pub fn opener(&self) -> Result<AgentId, GameError> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.contains(OPENING_CARD))
            .map(|(agent, _)| agent)
            .ok_or(GameError::NoOpeningCard(OPENING_CARD))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.agent_count()
    }

    #[must_use]
    pub fn hand(&self, agent: AgentId) -> &Hand {
        &self.hands[agent]
    }

    #[must_use]
    pub fn hands(&self) -> &AgentMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn into_hands(self) -> AgentMap<Hand> {
        self.hands
    }
}
