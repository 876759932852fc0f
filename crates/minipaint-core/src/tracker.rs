//! Gesture tracking: jitter filtering and conversion of pointer movement
//! into curve segments.

use crate::curve::CurveSegment;
use kurbo::Point;

/// Phase of the tracker's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A stroke is being drawn.
    Tracking,
}

/// Last position at which a segment was actually emitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackerState {
    pub last_committed: Point,
}

/// What the tracker made of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// A new stroke starts at this point.
    Begin(Point),
    /// Movement passed the slop filter.
    Segment(CurveSegment),
    /// Movement stayed within the slop; nothing to add.
    Filtered,
    /// The stroke in progress is finished.
    End,
    /// The event does not apply in the current phase, or its coordinates are unusable.
    Ignored,
}

/// Turns raw pointer events into stroke commands.
///
/// Movement is only accepted once it leaves the touch slop around the last
/// accepted point: `dx >= slop || dy > slop`. The comparison is inclusive on
/// the horizontal axis and exclusive on the vertical one.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    touch_slop: f64,
    phase: TrackerPhase,
    state: TrackerState,
    /// Latest raw sample, overwritten on every accepted event.
    sample: Point,
}

impl GestureTracker {
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop,
            phase: TrackerPhase::Idle,
            state: TrackerState::default(),
            sample: Point::ZERO,
        }
    }

    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Latest raw pointer position.
    pub fn sample(&self) -> Point {
        self.sample
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == TrackerPhase::Tracking
    }

    /// Start a stroke. A stroke already in progress is abandoned.
    pub fn on_pointer_down(&mut self, position: Point) -> Gesture {
        if !position.is_finite() {
            log::warn!("Ignoring pointer down at non-finite position {:?}", position);
            return Gesture::Ignored;
        }
        self.sample = position;
        self.state.last_committed = position;
        self.phase = TrackerPhase::Tracking;
        Gesture::Begin(position)
    }

    /// Feed a move sample. Moves while idle are no-ops.
    pub fn on_pointer_move(&mut self, position: Point) -> Gesture {
        if self.phase != TrackerPhase::Tracking {
            return Gesture::Ignored;
        }
        if !position.is_finite() {
            log::warn!("Ignoring pointer move to non-finite position {:?}", position);
            return Gesture::Ignored;
        }
        self.sample = position;

        let last = self.state.last_committed;
        let dx = (position.x - last.x).abs();
        let dy = (position.y - last.y).abs();

        if dx >= self.touch_slop || dy > self.touch_slop {
            self.state.last_committed = position;
            Gesture::Segment(CurveSegment::smoothed(last, position))
        } else {
            log::trace!("Filtered jitter dx={dx} dy={dy}");
            Gesture::Filtered
        }
    }

    /// Finish the stroke. The up position adds no geometry.
    pub fn on_pointer_up(&mut self, position: Point) -> Gesture {
        if self.phase != TrackerPhase::Tracking {
            return Gesture::Ignored;
        }
        if position.is_finite() {
            self.sample = position;
        }
        self.phase = TrackerPhase::Idle;
        Gesture::End
    }
}
