//! MiniPaint Application
//!
//! The native application shell: windowing, pointer input and GPU
//! presentation around a [`minipaint_core::StrokeCanvas`].

mod app;
mod config;
mod error;
mod pointer;

pub use app::App;
pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use error::{AppError, AppResult};
pub use pointer::PointerMapper;
