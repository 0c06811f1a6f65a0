//! Rendering game events for people and for machines.

use std::io::{self, Write};

use crate::arbiter::GameEvent;

/// One transcript line for `event`.
#[must_use]
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::Shuffled { seed } => format!("cards shuffled with seed {seed}"),
        GameEvent::Discarded { card } => format!("duplicated card {card} is discarded"),
        GameEvent::Dealt { agent, cards } => {
            let cards: Vec<String> = cards.iter().map(ToString::to_string).collect();
            format!("{agent} has {} cards: {}", cards.len(), cards.join(" "))
        }
        GameEvent::Played { agent, card } => format!("{agent} plays {card}"),
        GameEvent::Passed { agent } => format!("{agent} passes"),
        GameEvent::TrickReset { leader } => format!("{leader} leads a new trick"),
        GameEvent::Completed { agent, .. } => format!("{agent} completes"),
        GameEvent::Winner { agent } => format!("{agent} is winner"),
        GameEvent::Exited { agent } => format!("{agent} exits"),
        GameEvent::Loser { agent } => format!("{agent} is loser"),
        GameEvent::Finished => "game completed".to_string(),
    }
}

/// Write one rendered line per event.
pub fn write_text<W: Write>(out: &mut W, events: &[GameEvent]) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", render(event))?;
    }
    Ok(())
}

/// Write one JSON object per event.
pub fn write_json<W: Write>(out: &mut W, events: &[GameEvent]) -> io::Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
    }
    Ok(())
}
