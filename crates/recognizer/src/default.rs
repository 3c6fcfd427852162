//! Session bookkeeping shared by every backend

use tracing::debug;

use crate::context::RecognizerContext;
use crate::model::InkModel;
use crate::{
    EventType, Protocol, Recognizer, RecognizerCallback, RecognizerInfo, Trigger, Triggers,
};

/// Recognizer that only maintains model and context state
///
/// Concrete REST/WebSocket backends build on the same lifecycle; this one
/// never talks to a server, so every call settles immediately.
#[derive(Debug, Clone)]
pub struct DefaultRecognizer {
    info: RecognizerInfo,
}

impl Default for DefaultRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultRecognizer {
    pub fn new() -> Self {
        Self::with_info(RecognizerInfo {
            types: Vec::new(),
            protocol: Protocol::Rest,
            api_version: "V4".to_string(),
            available_triggers: Triggers {
                export_content: vec![Trigger::Demand],
                add_strokes: None,
            },
        })
    }

    pub fn with_info(info: RecognizerInfo) -> Self {
        Self { info }
    }
}

impl Recognizer for DefaultRecognizer {
    fn info(&self) -> RecognizerInfo {
        self.info.clone()
    }

    fn init(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    ) {
        let mut model = model.clone();
        model.reset_positions();
        debug!("Updated model ({} strokes)", model.strokes.len());

        context.update_recognition_positions(&model);
        context.init_result = Some(model.clone());
        context.initialized = true;
        debug!("Updated recognizer context: initialized");

        callback(Ok(model), &[EventType::Changed]);
    }

    fn reset(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    ) {
        let mut model = model.clone();
        model.reset_positions();
        debug!("Updated model ({} strokes)", model.strokes.len());

        context.update_recognition_positions(&model);
        if let Some(instance_id) = context.instance_id.take() {
            debug!("Dropped recognizer instance {}", instance_id);
        }

        callback(Ok(model), &[]);
    }

    fn clear(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    ) {
        let mut model = model.clone();
        model.clear();
        debug!("Updated model: cleared");

        context.update_recognition_positions(&model);
        if let Some(instance_id) = context.instance_id.take() {
            debug!("Dropped recognizer instance {}", instance_id);
        }

        callback(Ok(model), &[]);
    }
}
