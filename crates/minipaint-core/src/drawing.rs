//! The committed drawing.

use crate::stroke::Stroke;

/// All committed strokes, in commit order (back to front).
///
/// Only ever grows: there is no removal and no undo.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke on top of the others.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Strokes that carry geometry, back to front.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|stroke| !stroke.is_empty())
    }

    /// Number of committed strokes, taps included.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total segments across all strokes.
    pub fn segment_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
