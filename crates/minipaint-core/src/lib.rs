//! MiniPaint Core Library
//!
//! Platform-agnostic gesture tracking, curve smoothing and compositing for
//! the MiniPaint drawing surface.

pub mod canvas;
pub mod config;
pub mod curve;
pub mod drawing;
pub mod input;
pub mod paint;
pub mod stroke;
pub mod surface;
pub mod tracker;

pub use canvas::StrokeCanvas;
pub use config::{CanvasConfig, ConfigError, ConfigResult, SerializableColor};
pub use curve::{CurveBuilder, CurveSegment};
pub use drawing::Drawing;
pub use input::PointerEvent;
pub use paint::{DrawCommand, PaintStyle, Painter, RecordingPainter};
pub use stroke::Stroke;
pub use surface::DrawingSurface;
pub use tracker::{Gesture, GestureTracker, TrackerPhase, TrackerState};
