//! Ink capture state machine and stroke history
//!
//! This module provides the [`Stroker`], which connects:
//! - Pointer input (via `start_ink_capture`, `continue_ink_capture`, `end_ink_capture`)
//! - The live list of completed strokes
//! - The undo/redo stack
//! - Snapshot export for downstream consumers (recognizers, serializers)
//!
//! The stroker is single-threaded and synchronous; one input device drives
//! it at a time.

mod capture;
mod undo;

use inkwell_config::InkConfig;

use crate::events::InkEvent;
use crate::history::UndoRedoStack;
use crate::stroke::Stroke;

type EventListener = Box<dyn Fn(&InkEvent)>;

/// Capture state of a [`Stroker`]
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum CaptureState {
    #[default]
    Idle,
    /// A stroke is under construction
    Writing(Stroke),
}

/// Ink capture engine
///
/// This struct manages the full ink workflow:
/// 1. Input comes in via `start_ink_capture`, `continue_ink_capture`, `end_ink_capture`
/// 2. Finished strokes are appended to the live stroke list
/// 3. `undo`/`redo` move strokes between that list and the undo/redo stack
/// 4. `copy` hands point-in-time snapshots to consumers
pub struct Stroker {
    /// Engine settings
    pub(crate) config: InkConfig,
    /// Idle or writing (with the stroke under construction)
    pub(crate) state: CaptureState,
    /// Most recently finalized stroke, reported while idle
    pub(crate) last_finalized: Option<Stroke>,
    /// Completed strokes in capture order
    pub(crate) strokes: Vec<Stroke>,
    /// Undone strokes (most recent at end)
    pub(crate) undo_redo_stack: UndoRedoStack,
    /// Next stroke id
    pub(crate) next_stroke_id: u64,
    listeners: Vec<EventListener>,
}

impl std::fmt::Debug for Stroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stroker")
            .field("writing", &self.is_writing())
            .field("stroke_count", &self.strokes.len())
            .field("redo_count", &self.undo_redo_stack.len())
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl Default for Stroker {
    fn default() -> Self {
        Self::new()
    }
}

impl Stroker {
    /// Create a stroker with the default configuration
    pub fn new() -> Self {
        Self::with_config(InkConfig::default())
    }

    /// Create a stroker with the given configuration
    pub fn with_config(config: InkConfig) -> Self {
        Self {
            undo_redo_stack: UndoRedoStack::with_max_depth(config.max_redo_depth),
            config,
            state: CaptureState::Idle,
            last_finalized: None,
            strokes: Vec::new(),
            next_stroke_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &InkConfig {
        &self.config
    }

    /// Check if a stroke is currently being captured
    pub fn is_writing(&self) -> bool {
        matches!(self.state, CaptureState::Writing(_))
    }

    /// Check if there are no completed strokes
    ///
    /// Independent of the capture state and of the undo/redo stack.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Check if there is nothing to redo
    pub fn is_redo_empty(&self) -> bool {
        self.undo_redo_stack.is_empty()
    }

    /// The stroke under construction, or the most recently finalized one
    /// while idle. `None` if nothing was captured since creation or `clear`.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            CaptureState::Writing(stroke) => Some(stroke),
            CaptureState::Idle => self.last_finalized.as_ref(),
        }
    }

    /// Completed strokes in capture order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Owned copy of the completed strokes
    pub fn strokes_snapshot(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    /// Undone strokes, bottom first (the last element is redone next)
    pub fn undo_redo_stack(&self) -> &[Stroke] {
        self.undo_redo_stack.as_slice()
    }

    /// Number of completed strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Number of strokes available to redo
    pub fn redo_count(&self) -> usize {
        self.undo_redo_stack.len()
    }

    /// Append clones of the completed strokes from `index` onward to
    /// `destination`, preserving order. An index past the end appends nothing.
    pub fn copy(&self, destination: &mut Vec<Stroke>, index: usize) {
        if let Some(tail) = self.strokes.get(index..) {
            destination.extend_from_slice(tail);
        }
    }

    /// Register a listener called after every state change
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(&InkEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn emit_event(&self, event: InkEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}
