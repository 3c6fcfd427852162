//! Pointer-event scripts and their replay through a stroker

use anyhow::{Context, Result};
use ink::Stroker;
use serde::Deserialize;
use tracing::debug;

/// One recorded input or history action
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Pen down
    Start { x: f32, y: f32 },
    /// Pen move
    Move { x: f32, y: f32 },
    /// Pen up
    End,
    Undo,
    Redo,
    ClearRedo,
    Clear,
}

/// Parse a JSON array of events
pub fn parse(input: &str) -> Result<Vec<ReplayEvent>> {
    serde_json::from_str(input).context("Invalid replay script")
}

/// Apply every event in order, stopping at the first rejected transition
pub fn replay(stroker: &mut Stroker, events: &[ReplayEvent]) -> Result<()> {
    for (index, event) in events.iter().enumerate() {
        debug!("Replaying event {}: {:?}", index, event);
        let result = match *event {
            ReplayEvent::Start { x, y } => stroker.start_ink_capture(x, y),
            ReplayEvent::Move { x, y } => stroker.continue_ink_capture(x, y),
            ReplayEvent::End => stroker.end_ink_capture().map(|_| ()),
            ReplayEvent::Undo => {
                stroker.undo();
                Ok(())
            }
            ReplayEvent::Redo => {
                stroker.redo();
                Ok(())
            }
            ReplayEvent::ClearRedo => {
                stroker.clear_undo_redo_stack();
                Ok(())
            }
            ReplayEvent::Clear => {
                stroker.clear();
                Ok(())
            }
        };
        result.with_context(|| format!("Event {index} ({event:?}) rejected"))?;
    }
    Ok(())
}
