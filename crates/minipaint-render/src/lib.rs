//! MiniPaint Render Library
//!
//! Renderer abstraction and the Vello backend for the MiniPaint canvas.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod presenter;
#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use presenter::Presenter;
#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
