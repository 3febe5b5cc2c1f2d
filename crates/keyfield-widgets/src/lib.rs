//! Text-input widget for keyfield.
//!
//! [`TextBox`] is a polled, single-line field: it reads a [`FrameInput`]
//! snapshot every frame and draws through a [`Canvas`].
//!
//! [`FrameInput`]: keyfield_core::FrameInput
//! [`Canvas`]: keyfield_core::Canvas

pub mod caret;
pub mod config;
pub mod key_repeat;
pub mod text_box;

pub use caret::{Caret, CaretStyle};
pub use config::{CaretConfig, ConfigError, TextBoxConfig, TimingConfig};
pub use key_repeat::{is_control_key, KeyRepeat, KeyTiming, TypingState};
pub use text_box::{FocusChanged, TextBox, TextBoxOptions, TextBoxStyle, TextChanged};
