//! Frame scripts: TOML lists of input snapshots to feed a text box.
//!
//! ```toml
//! [[frame]]
//! mouse = [5.0, 5.0]
//! left = true
//!
//! [[frame]]
//! keys = ["LeftShift", "H"]
//!
//! [[frame]]
//! keys = ["Back"]
//! elapsed_ms = 50
//! repeat = 20
//! ```

use anyhow::{Context, Result};
use keyfield_core::{ButtonState, FrameInput, Key, KeyboardState, MouseState, Point};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_ELAPSED_MS: u64 = 16;

/// One or more identical frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FrameStep {
    /// Time since the previous frame
    #[serde(default = "default_elapsed_ms")]
    pub(crate) elapsed_ms: u64,
    /// Pointer position; omitted keeps the previous one
    #[serde(default)]
    pub(crate) mouse: Option<[f32; 2]>,
    /// Left button held
    #[serde(default)]
    pub(crate) left: bool,
    /// Keys held
    #[serde(default)]
    pub(crate) keys: Vec<Key>,
    /// How many frames this step lasts
    #[serde(default = "default_repeat")]
    pub(crate) repeat: u32,
}

const fn default_elapsed_ms() -> u64 {
    DEFAULT_ELAPSED_MS
}

const fn default_repeat() -> u32 {
    1
}

/// A replayable input script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    #[serde(default, rename = "frame")]
    pub(crate) frames: Vec<FrameStep>,
}

impl Script {
    pub(crate) fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("invalid frame script")
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let toml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&toml).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Expand the steps into per-frame input, carrying the pointer forward.
    pub(crate) fn inputs(&self) -> Vec<FrameInput> {
        let mut pointer = Point::ORIGIN;
        let mut inputs = Vec::new();
        for step in &self.frames {
            if let Some([x, y]) = step.mouse {
                pointer = Point::new(x, y);
            }
            let input = FrameInput::new(
                KeyboardState::from_keys(step.keys.iter().copied()),
                MouseState::at(pointer).with_left(ButtonState::from(step.left)),
                Duration::from_millis(step.elapsed_ms),
            );
            inputs.extend(std::iter::repeat(input).take(step.repeat as usize));
        }
        inputs
    }
}
