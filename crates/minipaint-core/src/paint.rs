//! Painter abstraction the surface renders through.

use crate::config::SerializableColor;
use kurbo::{BezPath, Cap, Join, Rect, Stroke};
use peniko::Color;

/// Paint used to stroke a path or rectangle.
#[derive(Debug, Clone)]
pub struct PaintStyle {
    pub color: Color,
    pub stroke: Stroke,
    /// Smooth edges without affecting the shape.
    pub anti_alias: bool,
}

impl PaintStyle {
    /// Anti-aliased paint with round joins and caps.
    pub fn round(color: Color, width: f64) -> Self {
        Self {
            color,
            stroke: Stroke::new(width).with_join(Join::Round).with_caps(Cap::Round),
            anti_alias: true,
        }
    }

    pub fn width(&self) -> f64 {
        self.stroke.width
    }
}

/// Drawing context handed to [`StrokeCanvas::paint`](crate::StrokeCanvas::paint).
///
/// Implementations can encode into a GPU scene, rasterize on the CPU, or
/// simply record the calls.
pub trait Painter {
    /// Fill the whole target with a color.
    fn fill_background(&mut self, color: Color);

    /// Stroke a path.
    fn draw_path(&mut self, path: &BezPath, style: &PaintStyle);

    /// Stroke a rectangle outline.
    fn draw_rect(&mut self, rect: Rect, style: &PaintStyle);
}

/// A paint call captured by [`RecordingPainter`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(SerializableColor),
    Path {
        path: BezPath,
        color: SerializableColor,
        width: f64,
    },
    Rect {
        rect: Rect,
        color: SerializableColor,
        width: f64,
    },
}

/// Painter that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of path commands recorded.
    pub fn path_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Path { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color.into()));
    }

    fn draw_path(&mut self, path: &BezPath, style: &PaintStyle) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            color: style.color.into(),
            width: style.width(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, style: &PaintStyle) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: style.color.into(),
            width: style.width(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_round_style() {
        let style = PaintStyle::round(Color::BLACK, 12.0);
        assert_eq!(style.stroke.join, Join::Round);
        assert_eq!(style.stroke.start_cap, Cap::Round);
        assert_eq!(style.stroke.end_cap, Cap::Round);
        assert!(style.anti_alias);
        assert!((style.width() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recording_order() {
        let mut painter = RecordingPainter::new();
        let style = PaintStyle::round(Color::BLACK, 2.0);
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(5.0, 5.0));

        painter.fill_background(Color::WHITE);
        painter.draw_path(&path, &style);
        painter.draw_rect(Rect::new(1.0, 1.0, 4.0, 4.0), &style);

        let commands = painter.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Background(_)));
        assert!(matches!(commands[1], DrawCommand::Path { .. }));
        assert!(matches!(commands[2], DrawCommand::Rect { .. }));
        assert_eq!(painter.path_count(), 1);

        painter.clear();
        assert!(painter.commands().is_empty());
    }
}
