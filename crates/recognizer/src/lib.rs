//! Recognition service lifecycle for Inkwell
//!
//! A recognizer receives the ink model built from a [`ink::Stroker`] and
//! manages its session around it (init, reset, clear, close). Transport and
//! the recognition itself belong to concrete backends; [`DefaultRecognizer`]
//! only does the session bookkeeping.

mod context;
mod default;
mod model;

pub use context::RecognizerContext;
pub use default::DefaultRecognizer;
pub use model::{InkModel, RecognitionPositions};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("Failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Event types passed to recognizer callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Downstream state is stale and should be re-rendered or re-queried
    Changed,
    Exported,
    Idle,
    Error,
}

/// Recognition types a backend can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecognitionType {
    Text,
    Math,
    Shape,
    Music,
    Analyzer,
}

/// Transport a backend speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Rest,
    WebSocket,
}

/// What causes a backend to export content or receive strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    PointerUp,
    QuietPeriod,
    Demand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triggers {
    /// Supported triggers for exporting content
    pub export_content: Vec<Trigger>,
    /// Supported triggers for adding strokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_strokes: Option<Vec<Trigger>>,
}

/// Supported configuration of a recognizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerInfo {
    pub types: Vec<RecognitionType>,
    pub protocol: Protocol,
    pub api_version: String,
    pub available_triggers: Triggers,
}

/// Callback invoked once per lifecycle call: `(result, event types)`
pub type RecognizerCallback<'a> =
    Box<dyn FnOnce(Result<InkModel, RecognizerError>, &[EventType]) + 'a>;

/// Trait for recognition backends
///
/// Every lifecycle call reports through its callback exactly once; errors go
/// into the callback's result rather than being returned.
pub trait Recognizer {
    /// Supported configuration (protocol, types, api version, triggers)
    fn info(&self) -> RecognizerInfo;

    /// Initialize recognition
    fn init(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    );

    /// Reset the server-side session
    fn reset(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    );

    /// Clear the model and the server-side session
    fn clear(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    );

    /// Close and free everything the recognizer will no longer use
    fn close(
        &self,
        context: &mut RecognizerContext,
        model: &InkModel,
        callback: RecognizerCallback<'_>,
    ) {
        self.clear(
            context,
            model,
            Box::new(move |result, _: &[EventType]| {
                callback(result, &[EventType::Changed])
            }),
        );
    }
}
