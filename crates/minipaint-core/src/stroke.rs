//! A single finger-down-to-finger-up gesture as smoothed curve geometry.

use crate::curve::CurveSegment;
use kurbo::{BezPath, Point, Rect, Shape as _};

/// One stroke: a start point followed by chained quadratic segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    start: Point,
    segments: Vec<CurveSegment>,
}

impl Stroke {
    /// Create an empty stroke starting at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    pub fn from_segments(start: Point, segments: Vec<CurveSegment>) -> Self {
        Self { start, segments }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A stroke without segments was a tap and has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, segment: CurveSegment) {
        self.segments.push(segment);
    }

    /// Last point the path reaches.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |segment| segment.end)
    }

    /// Build the path: move to the start, then one `quad_to` per segment.
    ///
    /// Each segment implicitly starts where the previous one ended.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for segment in &self.segments {
            path.quad_to(segment.control, segment.end);
        }
        path
    }

    /// Bounding box of the curve geometry, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        self.to_path().bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_empty_stroke() {
        let stroke = Stroke::new(Point::new(3.0, 4.0));
        assert!(stroke.is_empty());
        assert_eq!(stroke.end(), Point::new(3.0, 4.0));
        assert_eq!(stroke.to_path().elements(), &[PathEl::MoveTo(Point::new(3.0, 4.0))]);
    }

    #[test]
    fn test_path_chains_quads() {
        let start = Point::new(0.0, 0.0);
        let first = CurveSegment::smoothed(start, Point::new(20.0, 0.0));
        let second = CurveSegment::smoothed(Point::new(20.0, 0.0), Point::new(20.0, 20.0));
        let stroke = Stroke::from_segments(start, vec![first, second]);

        let path = stroke.to_path();
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::QuadTo(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                PathEl::QuadTo(Point::new(20.0, 0.0), Point::new(20.0, 10.0)),
            ]
        );
        assert_eq!(stroke.end(), Point::new(20.0, 10.0));
    }

    #[test]
    fn test_bounds() {
        let start = Point::new(0.0, 0.0);
        let stroke = Stroke::from_segments(
            start,
            vec![CurveSegment::smoothed(start, Point::new(10.0, 20.0))],
        );
        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 5.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 10.0).abs() < f64::EPSILON);
    }
}
