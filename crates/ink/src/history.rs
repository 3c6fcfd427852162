//! Undo/redo stack for strokes removed from the live ink

use std::num::NonZeroUsize;

use crate::stroke::Stroke;

/// Stack of undone strokes (most recently undone at the top/end)
///
/// Strokes only enter and leave at the top, so redoing everything that was
/// undone rebuilds the original capture order. With a depth bound the
/// oldest undone stroke is evicted first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndoRedoStack {
    strokes: Vec<Stroke>,
    max_depth: Option<NonZeroUsize>,
}

impl UndoRedoStack {
    /// Create an unbounded stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack that keeps at most `max_depth` strokes (None = unbounded)
    pub fn with_max_depth(max_depth: Option<NonZeroUsize>) -> Self {
        Self {
            strokes: Vec::new(),
            max_depth,
        }
    }

    /// Push a stroke onto the top.
    ///
    /// Returns the stroke evicted from the bottom if the depth bound was exceeded.
    pub fn push(&mut self, stroke: Stroke) -> Option<Stroke> {
        self.strokes.push(stroke);
        match self.max_depth {
            Some(max) if self.strokes.len() > max.get() => Some(self.strokes.remove(0)),
            _ => None,
        }
    }

    /// Pop the most recently undone stroke
    pub fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Peek at the most recently undone stroke
    pub fn peek(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    /// Drop every stroke, returning how many were discarded
    pub fn clear(&mut self) -> usize {
        let discarded = self.strokes.len();
        self.strokes.clear();
        discarded
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn max_depth(&self) -> Option<NonZeroUsize> {
        self.max_depth
    }

    /// Bottom-to-top view of the stack
    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_config::StrokeStyle;

    fn stroke(id: u64) -> Stroke {
        Stroke::from_parts(
            id,
            vec![id as f32],
            vec![0.0],
            vec![0],
            StrokeStyle::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = UndoRedoStack::new();
        assert!(stack.push(stroke(1)).is_none());
        assert!(stack.push(stroke(2)).is_none());

        assert_eq!(stack.peek().map(Stroke::id), Some(2));
        assert_eq!(stack.pop().map(|s| s.id()), Some(2));
        assert_eq!(stack.pop().map(|s| s.id()), Some(1));
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_depth_bound_evicts_oldest() {
        let mut stack = UndoRedoStack::with_max_depth(NonZeroUsize::new(2));
        stack.push(stroke(1));
        stack.push(stroke(2));
        let evicted = stack.push(stroke(3));

        assert_eq!(evicted.map(|s| s.id()), Some(1));
        let ids: Vec<u64> = stack.as_slice().iter().map(Stroke::id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_depth_one_keeps_latest() {
        let mut stack = UndoRedoStack::with_max_depth(NonZeroUsize::new(1));
        assert!(stack.push(stroke(1)).is_none());
        assert_eq!(stack.push(stroke(2)).map(|s| s.id()), Some(1));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop().map(|s| s.id()), Some(2));
    }

    #[test]
    fn test_clear_reports_discarded() {
        let mut stack = UndoRedoStack::new();
        stack.push(stroke(1));
        stack.push(stroke(2));
        assert_eq!(stack.clear(), 2);
        assert_eq!(stack.clear(), 0);
        assert_eq!(stack.len(), 0);
    }
}
