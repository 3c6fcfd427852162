//! Stroke data: points, timestamps and style for one pen-down to pen-up
//! sequence

use serde::{Deserialize, Serialize};

use inkwell_config::StrokeStyle;

use crate::error::StrokeDecodeError;

/// Axis-aligned bounding box of a stroke, in input coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// One pen-down to pen-up input, recorded as parallel point sequences
///
/// `x`, `y` and `t` always have the same length and at least one entry.
/// Only the stroker appends points, and only while the stroke is being
/// captured; once handed out a stroke is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRecord")]
pub struct Stroke {
    /// Identifier unique within the stroker that captured it
    id: u64,
    /// X coordinates in capture order
    x: Vec<f32>,
    /// Y coordinates in capture order
    y: Vec<f32>,
    /// Capture time of each point (milliseconds since the Unix epoch)
    t: Vec<u64>,
    /// Color and width at capture time
    style: StrokeStyle,
}

/// Unvalidated wire form of a stroke
#[derive(Deserialize)]
struct StrokeRecord {
    id: u64,
    x: Vec<f32>,
    y: Vec<f32>,
    #[serde(default)]
    t: Vec<u64>,
    #[serde(default)]
    style: StrokeStyle,
}

impl TryFrom<StrokeRecord> for Stroke {
    type Error = StrokeDecodeError;

    fn try_from(record: StrokeRecord) -> Result<Self, Self::Error> {
        // Timestamps are optional on the wire
        let t = if record.t.is_empty() {
            vec![0; record.x.len()]
        } else {
            record.t
        };
        Stroke::from_parts(record.id, record.x, record.y, t, record.style)
    }
}

impl Stroke {
    /// Start a stroke at its first point
    pub(crate) fn begin(id: u64, x: f32, y: f32, timestamp_ms: u64, style: StrokeStyle) -> Self {
        Self {
            id,
            x: vec![x],
            y: vec![y],
            t: vec![timestamp_ms],
            style,
        }
    }

    /// Append a point (capture in progress only)
    pub(crate) fn push(&mut self, x: f32, y: f32, timestamp_ms: u64) {
        self.x.push(x);
        self.y.push(y);
        self.t.push(timestamp_ms);
    }

    /// Build a finalized stroke from its point sequences.
    ///
    /// Fails if the sequences differ in length or are empty.
    pub fn from_parts(
        id: u64,
        x: Vec<f32>,
        y: Vec<f32>,
        t: Vec<u64>,
        style: StrokeStyle,
    ) -> Result<Self, StrokeDecodeError> {
        if x.len() != y.len() || x.len() != t.len() {
            return Err(StrokeDecodeError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                t: t.len(),
            });
        }
        if x.is_empty() {
            return Err(StrokeDecodeError::Empty);
        }
        Ok(Self { id, x, y, t, style })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn timestamps(&self) -> &[u64] {
        &self.t
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Number of captured points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for strokes produced by the stroker or `from_parts`
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in capture order
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The most recently captured point
    pub fn last_point(&self) -> Option<(f32, f32)> {
        Some((*self.x.last()?, *self.y.last()?))
    }

    /// Bounding box over all points
    pub fn bounds(&self) -> Option<Bounds> {
        let (first_x, first_y) = self.points().next()?;
        let init = Bounds {
            min_x: first_x,
            min_y: first_y,
            max_x: first_x,
            max_y: first_y,
        };
        Some(self.points().fold(init, |b, (x, y)| Bounds {
            min_x: b.min_x.min(x),
            min_y: b.min_y.min(y),
            max_x: b.max_x.max(x),
            max_y: b.max_y.max(y),
        }))
    }
}

/// Current wall-clock time in milliseconds, 0 if the clock is before the epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stroke {
        let mut stroke = Stroke::begin(7, 50.0, 2.0, 1000, StrokeStyle::default());
        stroke.push(60.0, 8.0, 1010);
        stroke.push(55.0, -3.0, 1020);
        stroke
    }

    #[test]
    fn test_begin_and_push() {
        let stroke = sample();
        assert_eq!(stroke.id(), 7);
        assert_eq!(stroke.x(), &[50.0, 60.0, 55.0]);
        assert_eq!(stroke.y(), &[2.0, 8.0, -3.0]);
        assert_eq!(stroke.timestamps(), &[1000, 1010, 1020]);
        assert_eq!(stroke.len(), 3);
        assert!(!stroke.is_empty());
        assert_eq!(stroke.last_point(), Some((55.0, -3.0)));
    }

    #[test]
    fn test_bounds() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.min_x, 50.0);
        assert_eq!(bounds.max_x, 60.0);
        assert_eq!(bounds.min_y, -3.0);
        assert_eq!(bounds.max_y, 8.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 11.0);
    }

    #[test]
    fn test_from_parts_validation() {
        let err = Stroke::from_parts(
            1,
            vec![1.0, 2.0],
            vec![1.0],
            vec![0, 0],
            StrokeStyle::default(),
        )
        .unwrap_err();
        assert_eq!(err, StrokeDecodeError::LengthMismatch { x: 2, y: 1, t: 2 });

        let err =
            Stroke::from_parts(1, vec![], vec![], vec![], StrokeStyle::default()).unwrap_err();
        assert_eq!(err, StrokeDecodeError::Empty);
    }

    #[test]
    fn test_serde_preserves_stroke() {
        let stroke = sample();
        let json = serde_json::to_string(&stroke).unwrap();
        let decoded: Stroke = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, stroke);
    }

    #[test]
    fn test_deserialize_without_timestamps() {
        let decoded: Stroke =
            serde_json::from_str(r#"{"id":3,"x":[1.0,2.0],"y":[3.0,4.0]}"#).unwrap();
        assert_eq!(decoded.timestamps(), &[0, 0]);
        assert_eq!(decoded.style(), StrokeStyle::default());
    }

    #[test]
    fn test_deserialize_rejects_mismatch() {
        let result: Result<Stroke, _> = serde_json::from_str(r#"{"id":3,"x":[1.0,2.0],"y":[3.0]}"#);
        assert!(result.is_err());

        let result: Result<Stroke, _> = serde_json::from_str(r#"{"id":3,"x":[],"y":[]}"#);
        assert!(result.is_err());
    }
}
