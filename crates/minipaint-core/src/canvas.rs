//! The stroke canvas: tracker, curve builder and surface wired together.

use crate::config::CanvasConfig;
use crate::curve::CurveBuilder;
use crate::drawing::Drawing;
use crate::input::PointerEvent;
use crate::paint::Painter;
use crate::surface::DrawingSurface;
use crate::tracker::{Gesture, GestureTracker};
use kurbo::{Rect, Size};

/// A freehand drawing surface driven by pointer events.
///
/// Events flow one way: the [`GestureTracker`] filters them, accepted
/// segments go to the [`CurveBuilder`], and pointer-up commits the built
/// stroke into the [`DrawingSurface`]. Hosts feed events through
/// [`handle_event`](Self::handle_event), report size changes through
/// [`resize`](Self::resize) and call [`paint`](Self::paint) whenever
/// [`take_redraw_request`](Self::take_redraw_request) reports a pending redraw.
#[derive(Debug, Clone)]
pub struct StrokeCanvas {
    config: CanvasConfig,
    tracker: GestureTracker,
    builder: CurveBuilder,
    surface: DrawingSurface,
    redraw_requested: bool,
}

impl Default for StrokeCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl StrokeCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            tracker: GestureTracker::new(config.touch_slop),
            builder: CurveBuilder::new(),
            surface: DrawingSurface::new(&config),
            config,
            redraw_requested: false,
        }
    }

    /// Process one pointer event. Always returns `true`: the canvas captures
    /// every pointer event delivered to it.
    ///
    /// Events that arrive before the first [`resize`](Self::resize) are
    /// consumed without effect.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        if !self.surface.is_ready() {
            log::trace!("Dropping {:?} before first resize", event);
            return true;
        }

        let gesture = match event {
            PointerEvent::Down { position } => self.tracker.on_pointer_down(position),
            PointerEvent::Move { position } => self.tracker.on_pointer_move(position),
            PointerEvent::Up { position } => self.tracker.on_pointer_up(position),
        };

        match gesture {
            Gesture::Begin(start) => {
                self.builder.begin(start);
                self.redraw_requested = true;
            }
            Gesture::Segment(segment) => {
                self.builder.append(segment);
                self.redraw_requested = true;
            }
            Gesture::Filtered => {
                self.redraw_requested = true;
            }
            Gesture::End => {
                if let Some(stroke) = self.builder.take() {
                    self.surface.commit(stroke);
                }
                self.redraw_requested = true;
            }
            Gesture::Ignored => {}
        }

        true
    }

    /// Host size-change notification.
    pub fn resize(&mut self, old_width: f64, old_height: f64, width: f64, height: f64) {
        log::debug!(
            "Size changed from {}x{} to {}x{}",
            old_width,
            old_height,
            width,
            height
        );
        if self.surface.resize(width, height) {
            self.redraw_requested = true;
        }
    }

    /// Render the current state.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P) {
        let live = self.builder.to_path();
        self.surface.paint(painter, live.as_ref());
    }

    /// Return whether a redraw was requested since the last call, clearing the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// The stroke being drawn.
    pub fn in_progress(&self) -> &CurveBuilder {
        &self.builder
    }

    pub fn drawing(&self) -> &Drawing {
        self.surface.drawing()
    }

    pub fn frame(&self) -> Option<Rect> {
        self.surface.frame()
    }

    pub fn size(&self) -> Option<Size> {
        self.surface.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveSegment;
    use crate::paint::{DrawCommand, RecordingPainter};
    use crate::tracker::TrackerPhase;
    use kurbo::Point;

    fn ready_canvas() -> StrokeCanvas {
        let mut canvas = StrokeCanvas::default();
        canvas.resize(0.0, 0.0, 800.0, 600.0);
        canvas.take_redraw_request();
        canvas
    }

    fn slop(canvas: &StrokeCanvas) -> f64 {
        canvas.config().touch_slop
    }

    #[test]
    fn test_single_segment_stroke() {
        let mut canvas = ready_canvas();
        let t = slop(&canvas);

        assert!(canvas.handle_event(PointerEvent::down(10.0, 10.0)));
        assert!(canvas.handle_event(PointerEvent::moved(10.0, 10.0 + t + 1.0)));
        assert!(canvas.handle_event(PointerEvent::up(10.0, 10.0 + t + 1.0)));

        let strokes = canvas.drawing().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0].segments(),
            &[CurveSegment::new(
                Point::new(10.0, 10.0),
                Point::new(10.0, 10.0 + (t + 1.0) / 2.0),
            )]
        );
    }

    #[test]
    fn test_up_commits_and_clears() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(0.0, 0.0));
        canvas.handle_event(PointerEvent::moved(50.0, 0.0));
        canvas.handle_event(PointerEvent::moved(100.0, 0.0));
        assert_eq!(canvas.in_progress().len(), 2);

        let before = canvas.drawing().len();
        canvas.handle_event(PointerEvent::up(100.0, 0.0));

        assert_eq!(canvas.drawing().len(), before + 1);
        assert!(canvas.in_progress().is_empty());
        assert!(!canvas.in_progress().is_active());
        assert_eq!(canvas.tracker().phase(), TrackerPhase::Idle);
    }

    #[test]
    fn test_tap_still_commits() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(5.0, 5.0));
        canvas.handle_event(PointerEvent::up(5.0, 5.0));
        assert_eq!(canvas.drawing().len(), 1);
        assert!(canvas.drawing().strokes()[0].is_empty());
    }

    #[test]
    fn test_second_down_discards_partial_stroke() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(0.0, 0.0));
        canvas.handle_event(PointerEvent::moved(50.0, 0.0));
        canvas.handle_event(PointerEvent::down(200.0, 200.0));

        assert!(canvas.drawing().is_empty());
        assert!(canvas.in_progress().is_empty());
        assert_eq!(canvas.tracker().state().last_committed, Point::new(200.0, 200.0));

        canvas.handle_event(PointerEvent::up(200.0, 200.0));
        assert_eq!(canvas.drawing().len(), 1);
        assert_eq!(canvas.drawing().strokes()[0].start(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_jitter_emits_nothing() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(100.0, 100.0));
        for i in 0..20 {
            let wobble = if i % 2 == 0 { 3.0 } else { -3.0 };
            canvas.handle_event(PointerEvent::moved(100.0 + wobble, 100.0 - wobble));
        }
        assert!(canvas.in_progress().is_empty());
        assert_eq!(canvas.tracker().state().last_committed, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_move_requests_redraw_even_when_filtered() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(100.0, 100.0));
        canvas.take_redraw_request();

        canvas.handle_event(PointerEvent::moved(101.0, 101.0));
        assert!(canvas.take_redraw_request());
        assert!(!canvas.take_redraw_request());
    }

    #[test]
    fn test_events_while_idle_are_noops() {
        let mut canvas = ready_canvas();
        assert!(canvas.handle_event(PointerEvent::moved(300.0, 300.0)));
        assert!(canvas.handle_event(PointerEvent::up(300.0, 300.0)));
        assert!(canvas.drawing().is_empty());
        assert!(!canvas.in_progress().is_active());
        assert!(!canvas.take_redraw_request());
    }

    #[test]
    fn test_events_before_resize_are_consumed() {
        let mut canvas = StrokeCanvas::default();
        assert!(canvas.handle_event(PointerEvent::down(0.0, 0.0)));
        assert!(canvas.handle_event(PointerEvent::moved(50.0, 0.0)));
        assert!(canvas.handle_event(PointerEvent::up(50.0, 0.0)));
        assert!(canvas.drawing().is_empty());
        assert_eq!(canvas.tracker().phase(), TrackerPhase::Idle);
    }

    #[test]
    fn test_resize_sets_frame() {
        let mut canvas = StrokeCanvas::default();
        canvas.resize(0.0, 0.0, 1080.0, 1920.0);
        assert_eq!(canvas.frame(), Some(Rect::new(40.0, 40.0, 1040.0, 1880.0)));
        assert!(canvas.take_redraw_request());
    }

    #[test]
    fn test_empty_repaint() {
        let canvas = ready_canvas();
        let mut painter = RecordingPainter::new();
        canvas.paint(&mut painter);

        let commands = painter.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Background(_)));
        assert!(matches!(commands[1], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_repaint_includes_stroke_in_progress() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(0.0, 0.0));
        canvas.handle_event(PointerEvent::moved(50.0, 0.0));
        canvas.handle_event(PointerEvent::up(50.0, 0.0));
        canvas.handle_event(PointerEvent::down(0.0, 100.0));
        canvas.handle_event(PointerEvent::moved(50.0, 100.0));

        let mut painter = RecordingPainter::new();
        canvas.paint(&mut painter);
        assert_eq!(painter.path_count(), 2);

        match &painter.commands()[2] {
            DrawCommand::Path { path, .. } => {
                assert_eq!(path, &canvas.in_progress().to_path().unwrap());
            }
            other => panic!("expected the live stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_drawing_survives_resize() {
        let mut canvas = ready_canvas();
        canvas.handle_event(PointerEvent::down(100.0, 100.0));
        canvas.handle_event(PointerEvent::moved(200.0, 200.0));
        canvas.handle_event(PointerEvent::up(200.0, 200.0));
        canvas.resize(800.0, 600.0, 600.0, 800.0);

        let mut painter = RecordingPainter::new();
        canvas.paint(&mut painter);
        assert_eq!(painter.path_count(), 1);
    }

    #[test]
    fn test_custom_slop() {
        let config = CanvasConfig {
            touch_slop: 20.0,
            ..CanvasConfig::default()
        };
        let mut canvas = StrokeCanvas::new(config);
        canvas.resize(0.0, 0.0, 500.0, 500.0);
        canvas.handle_event(PointerEvent::down(0.0, 0.0));
        canvas.handle_event(PointerEvent::moved(19.0, 20.0));
        assert!(canvas.in_progress().is_empty());
        canvas.handle_event(PointerEvent::moved(20.0, 0.0));
        assert_eq!(canvas.in_progress().len(), 1);
    }
}
