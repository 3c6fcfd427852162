use ink::{now_ms, Stroke, Stroker};
use serde::{Deserialize, Serialize};

use crate::RecognizerError;

/// Index bookkeeping for incremental recognition (-1 = nothing yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionPositions {
    /// Index of the last stroke sent to the recognizer
    pub last_sent_position: i64,
    /// Index of the last stroke covered by a received result
    pub last_received_position: i64,
}

impl Default for RecognitionPositions {
    fn default() -> Self {
        Self {
            last_sent_position: -1,
            last_received_position: -1,
        }
    }
}

/// Ink handed to a recognizer: a snapshot of the strokes plus session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkModel {
    /// Completed strokes in capture order
    pub strokes: Vec<Stroke>,
    pub positions: RecognitionPositions,
    /// Last exported recognition content, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports: Option<serde_json::Value>,
    /// Creation time in milliseconds since the Unix epoch
    pub creation_time_ms: u64,
}

impl Default for InkModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InkModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            positions: RecognitionPositions::default(),
            exports: None,
            creation_time_ms: now_ms(),
        }
    }

    /// Create a model holding a snapshot of the stroker's completed strokes
    pub fn from_stroker(stroker: &Stroker) -> Self {
        let mut model = Self::new();
        stroker.copy(&mut model.strokes, 0);
        model
    }

    /// Append the stroker's strokes that this model does not hold yet
    ///
    /// Returns the number of strokes added.
    pub fn sync_from_stroker(&mut self, stroker: &Stroker) -> usize {
        let before = self.strokes.len();
        stroker.copy(&mut self.strokes, before);
        self.strokes.len() - before
    }

    /// Forget which strokes were sent and recognized
    pub fn reset_positions(&mut self) {
        self.positions = RecognitionPositions::default();
    }

    /// Drop all strokes, exports and positions
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.exports = None;
        self.reset_positions();
    }

    /// Strokes not sent to the recognizer yet
    pub fn pending_strokes(&self) -> &[Stroke] {
        let start = usize::try_from(self.positions.last_sent_position + 1).unwrap_or(0);
        self.strokes.get(start..).unwrap_or(&[])
    }

    /// Record that every stroke currently held has been sent
    pub fn mark_sent(&mut self) {
        self.positions.last_sent_position = self.strokes.len() as i64 - 1;
    }

    /// Record that results cover every stroke sent so far
    pub fn mark_received(&mut self) {
        self.positions.last_received_position = self.positions.last_sent_position;
    }

    /// Serialize the model to JSON for a transport layer
    pub fn to_json(&self) -> Result<String, RecognizerError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroker_with(count: usize) -> Stroker {
        let mut stroker = Stroker::new();
        for i in 0..count {
            let v = i as f32;
            stroker.start_ink_capture(v, v).unwrap();
            stroker.continue_ink_capture(v + 1.0, v + 2.0).unwrap();
            stroker.end_ink_capture().unwrap();
        }
        stroker
    }

    #[test]
    fn test_from_stroker_snapshot() {
        let mut stroker = stroker_with(2);
        let model = InkModel::from_stroker(&stroker);
        assert_eq!(model.strokes.as_slice(), stroker.strokes());
        assert_eq!(model.positions, RecognitionPositions::default());

        // Later changes to the stroker don't leak into the snapshot
        stroker.undo();
        assert_eq!(model.strokes.len(), 2);
    }

    #[test]
    fn test_creation_time_from_stroke_clock() {
        let before = now_ms();
        let model = InkModel::new();
        assert!(model.creation_time_ms >= before);
        assert!(model.creation_time_ms <= now_ms());
    }

    #[test]
    fn test_sync_from_stroker() {
        let mut stroker = stroker_with(1);
        let mut model = InkModel::from_stroker(&stroker);

        stroker.start_ink_capture(9.0, 9.0).unwrap();
        stroker.end_ink_capture().unwrap();

        assert_eq!(model.sync_from_stroker(&stroker), 1);
        assert_eq!(model.sync_from_stroker(&stroker), 0);
        assert_eq!(model.strokes.as_slice(), stroker.strokes());
    }

    #[test]
    fn test_pending_strokes() {
        let stroker = stroker_with(3);
        let mut model = InkModel::from_stroker(&stroker);
        assert_eq!(model.pending_strokes().len(), 3);

        model.mark_sent();
        assert_eq!(model.positions.last_sent_position, 2);
        assert!(model.pending_strokes().is_empty());

        model.mark_received();
        assert_eq!(model.positions.last_received_position, 2);

        model.reset_positions();
        assert_eq!(model.pending_strokes().len(), 3);
    }

    #[test]
    fn test_clear() {
        let stroker = stroker_with(2);
        let mut model = InkModel::from_stroker(&stroker);
        model.exports = Some(serde_json::json!({ "text/plain": "hi" }));
        model.mark_sent();

        model.clear();
        assert!(model.strokes.is_empty());
        assert!(model.exports.is_none());
        assert_eq!(model.positions, RecognitionPositions::default());
    }

    #[test]
    fn test_to_json() {
        let stroker = stroker_with(1);
        let model = InkModel::from_stroker(&stroker);
        let json = model.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["strokes"][0]["x"], serde_json::json!([0.0, 1.0]));
        assert_eq!(value["strokes"][0]["y"], serde_json::json!([0.0, 2.0]));
        assert_eq!(value["positions"]["last_sent_position"], -1);
        assert!(value.get("exports").is_none());

        let decoded: InkModel = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, model);
    }
}
