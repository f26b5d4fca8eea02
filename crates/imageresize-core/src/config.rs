//! Resizer configuration and overlay styling.
//!
//! Options are read once when the resizer is built. They deserialize from a
//! JSON object with camelCase keys; unknown keys are ignored and missing keys
//! take the defaults below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default edge length of a handle, in pixels.
pub const DEFAULT_HANDLE_SIZE: f64 = 8.0;
/// Default handle color (`#3b82f6`).
pub const DEFAULT_HANDLE_COLOR: Rgba = Rgba::rgb(59, 130, 246);
/// Default overlay fill (`rgba(59, 130, 246, 0.1)`).
pub const DEFAULT_OVERLAY_COLOR: Rgba = Rgba::new(59, 130, 246, 0.1);

/// Overlays stack above the document content at this level.
pub const OVERLAY_Z_INDEX: i32 = 10;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Empty color string")]
    Empty,
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Invalid color function: {0}")]
    InvalidFunction(String),
    #[error("Unsupported color format: {0}")]
    Unsupported(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),
    #[error("Handle size must be a positive number, got {0}")]
    InvalidHandleSize(f64),
}

/// An sRGB color with straight (unpremultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        // `from_str_radix` alone would accept a sign prefix.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            8 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                f32::from(channel(&hex[6..8])?) / 255.0,
            )),
            _ => Err(invalid()),
        }
    }

    fn parse_function(name: &str, args: &str, original: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidFunction(original.to_string());
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if name == "rgba" { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let channel = |s: &str| -> Result<u8, ColorParseError> {
            let value: f64 = s.parse().map_err(|_| invalid())?;
            if !(0.0..=255.0).contains(&value) {
                return Err(invalid());
            }
            Ok(value.round() as u8)
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => {
                let value: f32 = alpha.parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(invalid());
                }
                value
            }
            None => 1.0,
        };
        Ok(Self::new(r, g, b, a))
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        for name in ["rgba", "rgb"] {
            if let Some(args) = lower
                .strip_prefix(name)
                .and_then(|rest| rest.trim_start().strip_prefix('('))
                .and_then(|rest| rest.strip_suffix(')'))
            {
                return Self::parse_function(name, args, s);
            }
        }
        Err(ColorParseError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl From<Rgba> for peniko::Color {
    fn from(color: Rgba) -> Self {
        peniko::Color::new([
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            color.a.clamp(0.0, 1.0),
        ])
    }
}

/// Options as they appear in JSON, before defaults and validation.
///
/// Colors stay strings here so that a bad value surfaces as
/// [`ConfigError::Color`] rather than as a JSON error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    handle_size: Option<f64>,
    handle_color: Option<String>,
    /// Lowercase spelling accepted by older integrations.
    #[serde(rename = "handlecolor")]
    legacy_handle_color: Option<String>,
    overlay_color: Option<String>,
}

/// Immutable resizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConfigOptions")]
pub struct ResizerConfig {
    /// Edge length of each handle, in pixels.
    pub handle_size: f64,
    /// Handle fill and overlay border color.
    pub handle_color: Rgba,
    /// Overlay body fill.
    pub overlay_color: Rgba,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            handle_color: DEFAULT_HANDLE_COLOR,
            overlay_color: DEFAULT_OVERLAY_COLOR,
        }
    }
}

impl TryFrom<ConfigOptions> for ResizerConfig {
    type Error = ConfigError;

    fn try_from(options: ConfigOptions) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let color = |value: Option<String>, default: Rgba| -> Result<Rgba, ConfigError> {
            match value {
                Some(value) => Ok(value.parse()?),
                None => Ok(default),
            }
        };
        let config = Self {
            handle_size: options.handle_size.unwrap_or(defaults.handle_size),
            handle_color: color(
                options.handle_color.or(options.legacy_handle_color),
                defaults.handle_color,
            )?,
            overlay_color: color(options.overlay_color, defaults.overlay_color)?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl ResizerConfig {
    /// Parse a configuration from a JSON object.
    ///
    /// Malformed JSON is reported as [`ConfigError::Json`]; well-formed
    /// options with bad values get their own variants.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: ConfigOptions = serde_json::from_str(json)?;
        Self::try_from(options)
    }

    /// Build a configuration from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let options: ConfigOptions = serde_json::from_value(value)?;
        Self::try_from(options)
    }

    /// Set the handle size.
    pub fn with_handle_size(mut self, size: f64) -> Result<Self, ConfigError> {
        self.handle_size = size;
        self.validate()?;
        Ok(self)
    }

    /// Set the handle color from a CSS color string.
    pub fn with_handle_color(mut self, color: &str) -> Result<Self, ConfigError> {
        self.handle_color = color.parse()?;
        Ok(self)
    }

    /// Set the overlay fill from a CSS color string.
    pub fn with_overlay_color(mut self, color: &str) -> Result<Self, ConfigError> {
        self.overlay_color = color.parse()?;
        Ok(self)
    }

    /// Check invariants that the type system does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(ConfigError::InvalidHandleSize(self.handle_size));
        }
        Ok(())
    }

    /// Resolve the visual style of overlays drawn with this configuration.
    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            border_color: self.handle_color,
            border_width: 1.0,
            border_dashed: true,
            fill_color: self.overlay_color,
            handle_size: self.handle_size,
            handle_color: self.handle_color,
            handle_border_color: Rgba::WHITE,
            handle_border_width: 1.0,
            z_index: OVERLAY_Z_INDEX,
        }
    }
}

/// Presentation of the selection overlay and its handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub border_color: Rgba,
    pub border_width: f64,
    pub border_dashed: bool,
    pub fill_color: Rgba,
    pub handle_size: f64,
    pub handle_color: Rgba,
    pub handle_border_color: Rgba,
    pub handle_border_width: f64,
    pub z_index: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        ResizerConfig::default().overlay_style()
    }
}
