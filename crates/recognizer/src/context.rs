use crate::model::{InkModel, RecognitionPositions};

/// Per-session recognizer state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizerContext {
    /// Set once `init` has settled
    pub initialized: bool,
    /// Server-side session identifier, if one is open
    pub instance_id: Option<String>,
    /// Positions mirrored from the model
    pub positions: RecognitionPositions,
    /// Settled result of the last `init`
    pub init_result: Option<InkModel>,
}

impl RecognizerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the model's recognition positions into the context
    pub fn update_recognition_positions(&mut self, model: &InkModel) {
        self.positions = model.positions;
    }
}
