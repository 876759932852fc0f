//! GPU presentation of a built scene onto a window surface.

use crate::renderer::{RenderResult, RendererError};
use peniko::Color;
use vello::wgpu;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};

/// Renders a [`Scene`] on the GPU and copies it to a surface texture.
///
/// Vello's compute pipeline needs a storage-bindable `Rgba8Unorm` target, while
/// surfaces are often `Bgra8Unorm`, so each frame is rendered to an
/// intermediate texture and blitted.
pub struct Presenter {
    renderer: vello::Renderer,
    blitter: wgpu::util::TextureBlitter,
}

impl Presenter {
    /// Create a presenter for surfaces of the given format.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> RenderResult<Self> {
        let renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{e:?}")))?;
        let blitter = wgpu::util::TextureBlitter::new(device, surface_format);
        log::debug!("Presenter ready for {:?} surfaces", surface_format);
        Ok(Self { renderer, blitter })
    }

    /// Frame parameters for a `width`x`height` target cleared to `base_color`.
    pub fn params(width: u32, height: u32, base_color: Color) -> RenderParams {
        RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        }
    }

    /// Render `scene` into `target`, whose size must match `params`.
    pub fn present(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        target: &wgpu::TextureView,
        params: &RenderParams,
    ) -> RenderResult<()> {
        let render_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: wgpu::Extent3d {
                width: params.width,
                height: params.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_view = render_texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .render_to_texture(device, queue, scene, &render_view, params)
            .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        self.blitter.copy(device, &mut encoder, &render_view, target);
        queue.submit(std::iter::once(encoder.finish()));

        Ok(())
    }
}
