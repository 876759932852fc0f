//! Application errors.

use minipaint_core::ConfigError;
use minipaint_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Renderer error: {0}")]
    Render(#[from] RendererError),
}

pub type AppResult<T> = Result<T, AppError>;
