//! Curve building: smoothing accepted samples into chained quadratic segments.

use crate::stroke::Stroke;
use kurbo::{BezPath, Point};

/// A quadratic curve command.
///
/// The curve runs from the current path point through `control` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub control: Point,
    pub end: Point,
}

impl CurveSegment {
    pub fn new(control: Point, end: Point) -> Self {
        Self { control, end }
    }

    /// Segment for a newly accepted sample.
    ///
    /// The previous accepted point becomes the control point and the curve
    /// ends halfway to the new sample, so consecutive segments join without
    /// a kink at every raw sample.
    pub fn smoothed(previous: Point, sample: Point) -> Self {
        Self {
            control: previous,
            end: previous.midpoint(sample),
        }
    }
}

/// Holds the stroke currently being drawn.
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    current: Option<Stroke>,
}

impl CurveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh stroke at `start`, discarding anything in progress.
    pub fn begin(&mut self, start: Point) {
        if let Some(stale) = self.current.replace(Stroke::new(start)) {
            if !stale.is_empty() {
                log::debug!("Discarding unfinished stroke with {} segments", stale.len());
            }
        }
    }

    /// Append a segment to the stroke in progress.
    ///
    /// Without a prior `begin`, the stroke starts at the segment's control point.
    pub fn append(&mut self, segment: CurveSegment) {
        self.current
            .get_or_insert_with(|| Stroke::new(segment.control))
            .push(segment);
    }

    /// Drop the stroke in progress.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Take the stroke in progress out of the builder, leaving it empty.
    pub fn take(&mut self) -> Option<Stroke> {
        self.current.take()
    }

    /// Copy of the stroke in progress. Later appends do not affect it.
    pub fn snapshot(&self) -> Option<Stroke> {
        self.current.clone()
    }

    /// Segments appended so far.
    pub fn segments(&self) -> &[CurveSegment] {
        self.current
            .as_ref()
            .map(Stroke::segments)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.segments().len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    /// Whether a stroke has been started (even with no segments yet).
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Path of the stroke in progress, if it has any geometry.
    pub fn to_path(&self) -> Option<BezPath> {
        self.current
            .as_ref()
            .filter(|stroke| !stroke.is_empty())
            .map(Stroke::to_path)
    }
}
