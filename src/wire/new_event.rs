use crate::container::model::TimelineEvent;
use crate::foundation::core::Timestamp;
use crate::foundation::error::{EventlineError, EventlineResult};

/// Encode a user-created event for the return transport.
///
/// Emits `[start, end, content]`, plus a fourth group cell when the event
/// carries one. User-created events only ever populate this reduced field
/// set. An empty end cell means "no end".
pub fn encode_new_event(event: &TimelineEvent) -> Vec<String> {
    let mut cells = vec![
        event.start.to_wire(),
        event.end.map(Timestamp::to_wire).unwrap_or_default(),
        event.content.clone(),
    ];
    if let Some(group) = &event.group {
        cells.push(group.clone());
    }
    cells
}

/// Decode a user-created event received from the client.
///
/// Accepts exactly 3 or 4 cells; anything else, or a malformed timestamp,
/// fails the pass.
pub fn decode_new_event(cells: &[String]) -> EventlineResult<TimelineEvent> {
    if cells.len() != 3 && cells.len() != 4 {
        return Err(EventlineError::decode(format!(
            "new event payload has {} cell(s), expected 3 or 4",
            cells.len()
        )));
    }

    let start = Timestamp::parse_wire(&cells[0])?;
    let end = if cells[1].is_empty() {
        None
    } else {
        Some(Timestamp::parse_wire(&cells[1])?)
    };

    let mut event = TimelineEvent::new(start, cells[2].clone());
    event.end = end;
    if let Some(group) = cells.get(3) {
        event.group = Some(group.clone());
    }
    Ok(event)
}

#[cfg(test)]
#[path = "../../tests/unit/wire/new_event.rs"]
mod tests;
