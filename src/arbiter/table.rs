//! Seating a deal at the table and playing it out.

use tracing::{debug, warn};

use super::engine::Arbiter;
use super::event::{GameEvent, GameOutcome};
use crate::agent::{Agent, AgentReport};
use crate::core::AgentMap;
use crate::deck::Deal;
use crate::error::GameError;
use crate::transport::duplex;

/// Play `deal` to the end.
///
/// Fails with `NoOpeningCard` before any agent is started if nobody holds
/// the opening card. Every agent task is joined before this returns, on
/// success and on error alike.
pub async fn play(deal: Deal) -> Result<GameOutcome, GameError> {
    let opener = deal.opener()?;
    let mut setup = setup_events(&deal);

    let mut links = Vec::with_capacity(deal.player_count());
    let mut handles = Vec::with_capacity(deal.player_count());
    for (agent, hand) in deal.hands().iter() {
        let (link, end) = duplex(agent);
        links.push(link);
        handles.push(Agent::new(agent, hand.clone()).spawn(end));
    }

    let result = Arbiter::new(AgentMap::from_vec(links), opener).run().await;

    let mut reports: Vec<AgentReport> = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(report) => {
                debug!(agent = %report.agent, remaining = report.remaining.len(), "agent joined");
                reports.push(report);
            }
            Err(err) => warn!(%err, "agent task failed"),
        }
    }

    let mut record = result?;
    setup.append(&mut record.events);
    record.events = setup;
    Ok(GameOutcome { record, reports })
}

fn setup_events(deal: &Deal) -> Vec<GameEvent> {
    let shuffled = deal.seed().map(|seed| GameEvent::Shuffled { seed });
    let discarded = deal.discarded().iter().map(|&card| GameEvent::Discarded { card });
    let dealt = deal.hands().iter().map(|(agent, hand)| GameEvent::Dealt {
        agent,
        cards: hand.to_vec(),
    });

    shuffled.into_iter().chain(discarded).chain(dealt).collect()
}
