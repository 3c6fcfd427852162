//! Undo/redo and reset for the stroker

use tracing::debug;

use crate::events::InkEvent;

use super::{CaptureState, Stroker};

impl Stroker {
    /// Undo the last completed stroke
    ///
    /// Returns true if a stroke was moved to the undo/redo stack, false if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.strokes.pop() else {
            debug!("Undo: no strokes available");
            return false;
        };

        let stroke_id = stroke.id();
        let evicted = self.undo_redo_stack.push(stroke);
        debug!(
            "Undid stroke {} ({} redoable)",
            stroke_id,
            self.undo_redo_stack.len()
        );

        self.emit_event(InkEvent::StrokeUndone { stroke_id });
        if let Some(evicted) = evicted {
            debug!("Redo depth exceeded, dropped stroke {}", evicted.id());
            self.emit_event(InkEvent::RedoStackCleared { discarded: 1 });
        }
        true
    }

    /// Redo the most recently undone stroke
    ///
    /// Returns true if a stroke was restored, false if the stack was empty.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undo_redo_stack.pop() else {
            debug!("Redo: no undone strokes available");
            return false;
        };

        let stroke_id = stroke.id();
        self.strokes.push(stroke);
        debug!(
            "Redid stroke {} ({} strokes total)",
            stroke_id,
            self.strokes.len()
        );

        self.emit_event(InkEvent::StrokeRedone { stroke_id });
        true
    }

    /// Discard every undone stroke; completed strokes and capture state are untouched
    pub fn clear_undo_redo_stack(&mut self) {
        let discarded = self.undo_redo_stack.clear();
        if discarded > 0 {
            debug!("Cleared undo/redo stack ({} strokes)", discarded);
            self.emit_event(InkEvent::RedoStackCleared { discarded });
        }
    }

    /// Reset to the initial state, dropping any stroke in progress
    pub fn clear(&mut self) {
        if let CaptureState::Writing(stroke) = &self.state {
            debug!("Clear: discarding stroke {} in progress", stroke.id());
        }

        self.state = CaptureState::Idle;
        self.last_finalized = None;
        self.strokes.clear();
        self.undo_redo_stack.clear();
        debug!("Stroker cleared");

        self.emit_event(InkEvent::Cleared);
    }
}
