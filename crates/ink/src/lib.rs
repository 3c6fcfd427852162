//! Inkwell ink engine - stroke capture and stroke history
//!
//! This crate provides the core data types for ink capture:
//! - [`stroke::Stroke`] - One pen-down to pen-up sequence of points
//! - [`stroker::Stroker`] - Capture state machine plus undo/redo history
//! - [`history::UndoRedoStack`] - Strokes removed by undo, restorable by redo
//! - [`events::InkEvent`] - Notifications emitted on every state change
//! - [`error`] - Capture and decode errors

pub mod error;
pub mod events;
pub mod history;
pub mod stroke;
pub mod stroker;

pub use error::*;
pub use events::*;
pub use history::*;
pub use stroke::*;
pub use stroker::*;

pub use inkwell_config::{InkConfig, RedoPolicy, StrokeStyle};
