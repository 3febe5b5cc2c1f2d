//! Core types and traits for the keyfield text-input widget.
//!
//! This crate provides the host boundary the widget is written against:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Polled input snapshots: [`KeyboardState`], [`MouseState`], [`FrameInput`]
//! - Font metrics: [`Font`]
//! - Drawing: [`GraphicsDevice`], [`SolidTexture`], [`Canvas`], [`DrawCommand`]

pub mod canvas;
mod color;
pub mod draw;
mod error;
mod font;
mod geometry;
mod graphics;
mod input;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::DrawCommand;
pub use error::GraphicsError;
pub use font::{printable_ascii_height, Font, MonospaceFont};
pub use geometry::{Point, Rect, Size};
pub use graphics::{GraphicsDevice, HeadlessDevice, SolidTexture, TextureId, TextureInfo};
pub use input::{ButtonState, FrameInput, Key, KeyboardState, MouseState};
pub use widget::{Canvas, TypeId, Widget, WidgetId};
