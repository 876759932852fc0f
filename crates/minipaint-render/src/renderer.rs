//! Renderer trait abstraction.

use kurbo::{Rect, Size};
use minipaint_core::StrokeCanvas;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a StrokeCanvas,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a StrokeCanvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
        }
    }

    /// Viewport as a rectangle anchored at the origin.
    pub fn viewport(&self) -> Rect {
        self.viewport_size.to_rect()
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.canvas.config().background()
    }
}
