//! Core application state and lifecycle.

use kurbo::{Point, Size};
use minipaint_core::{PointerEvent, StrokeCanvas};
use minipaint_render::{Presenter, RenderContext, Renderer, RendererError, VelloRenderer};
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::pointer::PointerMapper;

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    presenter: Presenter,
    renderer: VelloRenderer,

    // State
    canvas: StrokeCanvas,
    pointer: PointerMapper,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: vello::util::RenderContext,
    /// First fatal error hit inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: vello::util::RenderContext::new(),
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub fn run(config: AppConfig) -> AppResult<()> {
        let event_loop = EventLoop::new()?;
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app)?;
        app.error.take().map_or(Ok(()), Err)
    }

    /// Create the window, GPU surface and canvas.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<AppState> {
        let mut window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        if self.config.fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let surface = pollster::block_on(self.render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(format!("{e:?}")))?;

        let device = &self.render_cx.devices[surface.dev_id].device;
        let presenter = Presenter::new(device, surface.config.format)?;

        // Events arrive in physical pixels; scale the canvas distances to match.
        let scale_factor = window.scale_factor();
        let mut canvas = StrokeCanvas::new(self.config.canvas.scaled(scale_factor));
        canvas.resize(0.0, 0.0, width as f64, height as f64);

        log::info!("MiniPaint initialized - {}x{} @{}x", width, height, scale_factor);
        window.request_redraw();

        Ok(AppState {
            window,
            surface,
            presenter,
            renderer: VelloRenderer::new(),
            canvas,
            pointer: PointerMapper::new(),
        })
    }

    /// Stop the event loop, keeping the first error for `run` to return.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl AppState {
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> AppResult<()> {
        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let ctx = RenderContext::new(&self.canvas, Size::new(width as f64, height as f64));
        self.renderer.build_scene(&ctx);
        let base_color = self.renderer.background_color(&ctx);
        let scene = self.renderer.take_scene();

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return Ok(());
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let params = Presenter::params(width, height, base_color);
        self.presenter.present(
            &device_handle.device,
            &device_handle.queue,
            &scene,
            &surface_view,
            &params,
        )?;

        surface_texture.present();
        Ok(())
    }

    /// Forward a mapped pointer event and schedule a redraw if the canvas asks for one.
    fn dispatch(&mut self, event: Option<PointerEvent>) {
        if let Some(event) = event {
            self.canvas.handle_event(event);
        }
        if self.canvas.take_redraw_request() {
            self.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.init(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                let (old_width, old_height) = (state.surface.config.width, state.surface.config.height);
                self.render_cx
                    .resize_surface(&mut state.surface, size.width, size.height);
                state.canvas.resize(
                    old_width as f64,
                    old_height as f64,
                    size.width as f64,
                    size.height as f64,
                );
                if state.canvas.take_redraw_request() {
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = state.redraw(&self.render_cx) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = state.pointer.cursor_moved(Point::new(position.x, position.y));
                state.dispatch(event);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let event = state.pointer.left_button(button_state);
                state.dispatch(event);
            }

            WindowEvent::Touch(touch) => {
                let position = Point::new(touch.location.x, touch.location.y);
                let event = state.pointer.touch(touch.id, touch.phase, position);
                state.dispatch(event);
            }

            _ => {}
        }
    }
}
