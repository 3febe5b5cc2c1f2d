//! TOML configuration for a text box.
//!
//! ```toml
//! password = true
//! border_color = "#202020"
//!
//! [area]
//! x = 10.0
//! y = 10.0
//! width = 240.0
//! height = 24.0
//!
//! [timing]
//! initial_delay_ms = 400
//! ```

use crate::caret::CaretStyle;
use crate::key_repeat::KeyTiming;
use crate::text_box::{TextBox, TextBoxOptions, TextBoxStyle};
use keyfield_core::{Color, ColorParseError, Font, Rect, SolidTexture};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a text box configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The TOML is malformed or has unknown keys
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A color string is not valid hex
    #[error("invalid color for `{field}`: {source}")]
    Color {
        /// Config key holding the color
        field: &'static str,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },
    /// The area has no room for text
    #[error("area must have a positive size, got {width}x{height}")]
    EmptyArea {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },
    /// The caret thickness is negative or not a number
    #[error("caret thickness must be a finite, non-negative width, got {0}")]
    CaretThickness(f32),
}

/// Auto-repeat timing in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Hold time before repeating starts
    pub initial_delay_ms: u64,
    /// Time between repeats
    pub repeat_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timing = KeyTiming::default();
        Self {
            initial_delay_ms: duration_ms(timing.initial_delay),
            repeat_interval_ms: duration_ms(timing.repeat_interval),
        }
    }
}

/// Caret appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaretConfig {
    /// Blink phase length in milliseconds, 0 for a steady caret
    pub blink_ms: u64,
    /// Bar width in pixels
    pub thickness: f32,
}

impl Default for CaretConfig {
    fn default() -> Self {
        let caret = CaretStyle::default();
        Self {
            blink_ms: duration_ms(caret.blink_interval),
            thickness: caret.thickness,
        }
    }
}

/// Text box configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextBoxConfig {
    /// Border color as hex
    pub border_color: String,
    /// Fill color as hex
    pub fill_color: String,
    /// Text color as hex
    pub text_color: String,
    /// Hover fill color as hex
    pub hover_color: String,
    /// Read-only fill color as hex
    pub disabled_color: String,
    /// Mask the text
    pub password: bool,
    /// Keep `area.height` instead of fitting it to the font
    pub preserve_height: bool,
    /// Start read-only
    pub read_only: bool,
    /// Mask character
    pub mask: char,
    /// Inner area
    pub area: Rect,
    /// Auto-repeat timing
    pub timing: TimingConfig,
    /// Caret appearance
    pub caret: CaretConfig,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        let style = TextBoxStyle::default();
        Self {
            border_color: style.border_color.to_hex(),
            fill_color: style.fill_color.to_hex(),
            text_color: style.text_color.to_hex(),
            hover_color: style.hover_color.to_hex(),
            disabled_color: style.disabled_color.to_hex(),
            password: false,
            preserve_height: false,
            read_only: false,
            mask: style.mask,
            area: Rect::new(0.0, 0.0, 200.0, 24.0),
            timing: TimingConfig::default(),
            caret: CaretConfig::default(),
        }
    }
}

impl TextBoxConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, a color is not valid hex,
    /// or the area is empty.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml)
    }

    /// Check colors, area and caret thickness.
    ///
    /// # Errors
    ///
    /// Returns the first invalid color, [`ConfigError::EmptyArea`] or
    /// [`ConfigError::CaretThickness`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style()?;
        let Rect { width, height, .. } = self.area;
        let width_ok = width.is_finite() && width > 0.0;
        let height_ok = !self.preserve_height || (height.is_finite() && height > 0.0);
        if !width_ok || !height_ok {
            return Err(ConfigError::EmptyArea { width, height });
        }
        let thickness = self.caret.thickness;
        if !(thickness.is_finite() && thickness >= 0.0) {
            return Err(ConfigError::CaretThickness(thickness));
        }
        Ok(())
    }

    /// Resolve the style.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] naming the first invalid color.
    pub fn style(&self) -> Result<TextBoxStyle, ConfigError> {
        Ok(TextBoxStyle {
            border_color: parse_color("border_color", &self.border_color)?,
            fill_color: parse_color("fill_color", &self.fill_color)?,
            text_color: parse_color("text_color", &self.text_color)?,
            hover_color: parse_color("hover_color", &self.hover_color)?,
            disabled_color: parse_color("disabled_color", &self.disabled_color)?,
            mask: self.mask,
            timing: KeyTiming {
                initial_delay: Duration::from_millis(self.timing.initial_delay_ms),
                repeat_interval: Duration::from_millis(self.timing.repeat_interval_ms),
            },
            caret: CaretStyle {
                thickness: self.caret.thickness,
                blink_interval: Duration::from_millis(self.caret.blink_ms),
                ..CaretStyle::default()
            },
        })
    }

    /// Build the text box this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(
        &self,
        pixel: Arc<SolidTexture>,
        font: Arc<dyn Font>,
    ) -> Result<TextBox, ConfigError> {
        self.validate()?;
        let options = TextBoxOptions::new(pixel, self.area, font)
            .style(self.style()?)
            .password(self.password)
            .preserve_height(self.preserve_height);
        Ok(TextBox::new(options).with_read_only(self.read_only))
    }
}

impl TextBox {
    /// Build a text box from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(
        config: &TextBoxConfig,
        pixel: Arc<SolidTexture>,
        font: Arc<dyn Font>,
    ) -> Result<Self, ConfigError> {
        config.build(pixel, font)
    }
}

fn parse_color(field: &'static str, hex: &str) -> Result<Color, ConfigError> {
    Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
