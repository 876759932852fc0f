//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Rect};
use minipaint_core::{PaintStyle, Painter};
use peniko::{Color, Fill};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
///
/// Implements [`Painter`], so the canvas paints straight into the scene.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Area covered by a background fill.
    viewport: Rect,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Rect::ZERO,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.viewport = ctx.viewport();
        ctx.canvas.paint(self);
    }
}

impl Painter for VelloRenderer {
    fn fill_background(&mut self, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, color, None, &self.viewport);
    }

    fn draw_path(&mut self, path: &BezPath, style: &PaintStyle) {
        self.scene
            .stroke(&style.stroke, Affine::IDENTITY, style.color, None, path);
    }

    fn draw_rect(&mut self, rect: Rect, style: &PaintStyle) {
        self.scene
            .stroke(&style.stroke, Affine::IDENTITY, style.color, None, &rect);
    }
}
