//! Drawing surface: committed content, frame and per-repaint compositing.
//!
//! All strokes are kept as vector data and redrawn from scratch on every
//! repaint. A resize therefore never loses the picture; the price is that a
//! repaint walks every committed stroke, so frame cost grows with the drawing.

use crate::config::CanvasConfig;
use crate::drawing::Drawing;
use crate::paint::{PaintStyle, Painter};
use crate::stroke::Stroke;
use kurbo::{BezPath, Rect, Size};
use peniko::Color;

/// Owns the committed drawing and the decorative frame.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    drawing: Drawing,
    /// `None` until the first resize.
    size: Option<Size>,
    frame: Option<Rect>,
    frame_inset: f64,
    background: Color,
    stroke_style: PaintStyle,
    frame_style: PaintStyle,
}

impl DrawingSurface {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            drawing: Drawing::new(),
            size: None,
            frame: None,
            frame_inset: config.frame_inset,
            background: config.background(),
            stroke_style: config.stroke_style(),
            frame_style: config.frame_style(),
        }
    }

    /// Recompute the frame for a new surface size.
    ///
    /// Returns `false` and keeps the previous size if the dimensions are
    /// negative or not finite.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            log::warn!("Ignoring invalid surface size {}x{}", width, height);
            return false;
        }
        let inset = self.frame_inset;
        self.size = Some(Size::new(width, height));
        self.frame = Some(Rect::new(inset, inset, width - inset, height - inset));
        log::debug!("Surface resized to {}x{}", width, height);
        true
    }

    /// Whether a size is known and the surface can be painted.
    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Add a finished stroke to the drawing.
    pub fn commit(&mut self, stroke: Stroke) {
        log::debug!(
            "Committing stroke #{} ({} segments)",
            self.drawing.len() + 1,
            stroke.len()
        );
        self.drawing.commit(stroke);
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn stroke_style(&self) -> &PaintStyle {
        &self.stroke_style
    }

    /// Paint background, committed strokes, the stroke in progress and the
    /// frame, in that order.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P, in_progress: Option<&BezPath>) {
        if !self.is_ready() {
            log::warn!("Paint requested before the surface was sized; skipping");
            return;
        }

        painter.fill_background(self.background);

        for stroke in self.drawing.visible_strokes() {
            painter.draw_path(&stroke.to_path(), &self.stroke_style);
        }

        if let Some(path) = in_progress {
            painter.draw_path(path, &self.stroke_style);
        }

        // A surface smaller than twice the inset leaves no room for the frame.
        if let Some(frame) = self.frame.filter(|f| f.width() > 0.0 && f.height() > 0.0) {
            painter.draw_rect(frame, &self.frame_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveSegment;
    use crate::paint::{DrawCommand, RecordingPainter};
    use kurbo::Point;

    fn line_stroke() -> Stroke {
        let start = Point::new(100.0, 100.0);
        Stroke::from_segments(
            start,
            vec![CurveSegment::smoothed(start, Point::new(150.0, 100.0))],
        )
    }

    #[test]
    fn test_resize_sets_frame() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default());
        assert!(surface.frame().is_none());

        assert!(surface.resize(800.0, 600.0));
        assert_eq!(surface.frame(), Some(Rect::new(40.0, 40.0, 760.0, 560.0)));
        assert_eq!(surface.size(), Some(Size::new(800.0, 600.0)));

        surface.resize(320.0, 480.0);
        assert_eq!(surface.frame(), Some(Rect::new(40.0, 40.0, 280.0, 440.0)));
    }

    #[test]
    fn test_invalid_resize_is_ignored() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default());
        surface.resize(800.0, 600.0);
        assert!(!surface.resize(f64::NAN, 100.0));
        assert!(!surface.resize(-1.0, 100.0));
        assert_eq!(surface.size(), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn test_paint_before_resize_draws_nothing() {
        let surface = DrawingSurface::new(&CanvasConfig::default());
        let mut painter = RecordingPainter::new();
        surface.paint(&mut painter, None);
        assert!(painter.commands().is_empty());
    }

    #[test]
    fn test_empty_paint_is_background_and_frame() {
        let config = CanvasConfig::default();
        let mut surface = DrawingSurface::new(&config);
        surface.resize(400.0, 300.0);

        let mut painter = RecordingPainter::new();
        surface.paint(&mut painter, None);

        assert_eq!(
            painter.commands(),
            &[
                DrawCommand::Background(config.background_color),
                DrawCommand::Rect {
                    rect: Rect::new(40.0, 40.0, 360.0, 260.0),
                    color: config.paint_color,
                    width: config.stroke_width,
                },
            ]
        );
    }

    #[test]
    fn test_paint_order() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default());
        surface.resize(400.0, 300.0);
        surface.commit(line_stroke());
        let live = line_stroke().to_path();

        let mut painter = RecordingPainter::new();
        surface.paint(&mut painter, Some(&live));

        let commands = painter.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], DrawCommand::Background(_)));
        assert!(matches!(commands[1], DrawCommand::Path { .. }));
        assert!(matches!(commands[2], DrawCommand::Path { .. }));
        assert!(matches!(commands[3], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_resize_keeps_drawing() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default());
        surface.resize(400.0, 300.0);
        surface.commit(line_stroke());
        surface.resize(1024.0, 768.0);

        let mut painter = RecordingPainter::new();
        surface.paint(&mut painter, None);
        assert_eq!(surface.drawing().len(), 1);
        assert_eq!(painter.path_count(), 1);
    }

    #[test]
    fn test_tiny_surface_skips_frame() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default());
        surface.resize(60.0, 60.0);

        let mut painter = RecordingPainter::new();
        surface.paint(&mut painter, None);
        assert_eq!(painter.commands().len(), 1);
    }
}
