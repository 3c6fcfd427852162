//! Capture transitions for the stroker

use inkwell_config::RedoPolicy;
use tracing::{debug, warn};

use crate::error::CaptureError;
use crate::events::InkEvent;
use crate::stroke::{now_ms, Stroke};

use super::{CaptureState, Stroker};

impl Stroker {
    /// Begin a stroke at `(x, y)`
    ///
    /// Fails with [`CaptureError::AlreadyWriting`] if a stroke is already
    /// being captured; the stroke in progress is left untouched.
    pub fn start_ink_capture(&mut self, x: f32, y: f32) -> Result<(), CaptureError> {
        if let CaptureState::Writing(current) = &self.state {
            warn!(
                "start_ink_capture: stroke {} still in progress, rejecting",
                current.id()
            );
            return Err(CaptureError::AlreadyWriting);
        }

        if self.config.redo_policy == RedoPolicy::ClearOnStart {
            let discarded = self.undo_redo_stack.clear();
            if discarded > 0 {
                debug!("Discarded {} undone strokes on new capture", discarded);
                self.emit_event(InkEvent::RedoStackCleared { discarded });
            }
        }

        let stroke_id = self.next_stroke_id;
        self.next_stroke_id += 1;

        self.state = CaptureState::Writing(Stroke::begin(
            stroke_id,
            x,
            y,
            now_ms(),
            self.config.stroke_style,
        ));
        debug!("Started stroke {} at ({:.1}, {:.1})", stroke_id, x, y);

        self.emit_event(InkEvent::StrokeStarted { stroke_id });
        Ok(())
    }

    /// Continue the current stroke with a new point
    pub fn continue_ink_capture(&mut self, x: f32, y: f32) -> Result<(), CaptureError> {
        match &mut self.state {
            CaptureState::Writing(stroke) => {
                stroke.push(x, y, now_ms());
                Ok(())
            }
            CaptureState::Idle => {
                warn!("continue_ink_capture: no active stroke, rejecting");
                Err(CaptureError::NotWriting {
                    operation: "continue_ink_capture",
                })
            }
        }
    }

    /// End the current stroke and append it to the completed strokes
    ///
    /// Returns the finalized stroke, which stays reported by
    /// [`Stroker::current_stroke`] until the next capture starts.
    pub fn end_ink_capture(&mut self) -> Result<&Stroke, CaptureError> {
        let stroke = match std::mem::take(&mut self.state) {
            CaptureState::Writing(stroke) => stroke,
            CaptureState::Idle => {
                warn!("end_ink_capture: no active stroke, rejecting");
                return Err(CaptureError::NotWriting {
                    operation: "end_ink_capture",
                });
            }
        };

        let stroke_id = stroke.id();
        let point_count = stroke.len();
        self.strokes.push(stroke.clone());
        debug!(
            "Completed stroke {} ({} points, {} strokes total)",
            stroke_id,
            point_count,
            self.strokes.len()
        );

        self.emit_event(InkEvent::StrokeCompleted {
            stroke_id,
            point_count,
        });
        Ok(&*self.last_finalized.insert(stroke))
    }
}
