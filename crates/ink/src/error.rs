use thiserror::Error;

/// Error type for capture lifecycle operations.
///
/// Returned when a capture method is called in a state that does not allow
/// it. The stroker is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Ink capture already in progress - call end_ink_capture() first")]
    AlreadyWriting,
    #[error("No ink capture in progress - call start_ink_capture() before {operation}()")]
    NotWriting { operation: &'static str },
}

/// Error type for rebuilding a stroke from serialized data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrokeDecodeError {
    #[error("Point sequence length mismatch: x={x}, y={y}, t={t}")]
    LengthMismatch { x: usize, y: usize, t: usize },
    #[error("Stroke has no points")]
    Empty,
}
