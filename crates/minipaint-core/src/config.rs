//! Canvas configuration.

use crate::paint::PaintStyle;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum drag distance, in logical pixels, before movement counts as drawing.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
/// Default margin between the surface bounds and the decorative frame.
pub const DEFAULT_FRAME_INSET: f64 = 40.0;
/// Default stroke width for both strokes and the frame.
pub const DEFAULT_STROKE_WIDTH: f64 = 12.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value.
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Settings for a [`StrokeCanvas`](crate::StrokeCanvas).
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Jitter filter threshold in pixels.
    pub touch_slop: f64,
    /// Inset of the decorative frame from the surface edges.
    pub frame_inset: f64,
    /// Width of every stroke and of the frame border.
    pub stroke_width: f64,
    /// Stroke color.
    pub paint_color: SerializableColor,
    /// Background fill color.
    pub background_color: SerializableColor,
    /// Frame border color. Falls back to the paint color.
    pub frame_color: Option<SerializableColor>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            frame_inset: DEFAULT_FRAME_INSET,
            stroke_width: DEFAULT_STROKE_WIDTH,
            paint_color: SerializableColor::from_rgb_hex(0xFFEB3B),
            background_color: SerializableColor::from_rgb_hex(0xFF5722),
            frame_color: None,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that all distances are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "touch_slop",
                value: self.touch_slop,
            });
        }
        if !self.frame_inset.is_finite() || self.frame_inset < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "frame_inset",
                value: self.frame_inset,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "stroke_width",
                value: self.stroke_width,
            });
        }
        Ok(())
    }

    /// Scale all pixel distances, e.g. by a window's HiDPI factor.
    ///
    /// Non-positive or non-finite factors leave the config unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self.clone();
        }
        Self {
            touch_slop: self.touch_slop * factor,
            frame_inset: self.frame_inset * factor,
            stroke_width: self.stroke_width * factor,
            ..self.clone()
        }
    }

    pub fn background(&self) -> Color {
        self.background_color.into()
    }

    /// Paint used for every stroke.
    pub fn stroke_style(&self) -> PaintStyle {
        PaintStyle::round(self.paint_color.into(), self.stroke_width)
    }

    /// Paint used for the frame border.
    pub fn frame_style(&self) -> PaintStyle {
        let color = self.frame_color.unwrap_or(self.paint_color);
        PaintStyle::round(color.into(), self.stroke_width)
    }
}
