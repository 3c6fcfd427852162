//! Events emitted by the stroker on capture and history changes.

/// Events emitted by [`crate::Stroker`] after each state change.
///
/// These let observers (renderers, recognizer glue) react to ink changes
/// without holding a reference into the stroker. Failed and no-op calls
/// emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InkEvent {
    /// A new stroke has started capturing.
    StrokeStarted { stroke_id: u64 },
    /// A stroke was finalized and appended to the live strokes.
    StrokeCompleted { stroke_id: u64, point_count: usize },
    /// A stroke moved from the live strokes to the undo/redo stack.
    StrokeUndone { stroke_id: u64 },
    /// A stroke moved from the undo/redo stack back to the live strokes.
    StrokeRedone { stroke_id: u64 },
    /// Undone strokes were discarded (explicitly, by policy or by the depth bound).
    RedoStackCleared { discarded: usize },
    /// The stroker was reset to its initial state.
    Cleared,
}
