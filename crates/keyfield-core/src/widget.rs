//! Widget trait and related types.
//!
//! Widgets are polled, not event-driven: the host calls [`Widget::update`]
//! once per frame with a fresh [`FrameInput`], then [`Widget::draw`] with the
//! frame's canvas.
//!
//! # Examples
//!
//! ```
//! use keyfield_core::{TypeId, WidgetId};
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::font::Font;
use crate::geometry::{Point, Rect};
use crate::graphics::SolidTexture;
use crate::input::FrameInput;
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Core widget trait for polled, frame-driven UI elements.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Advance one frame.
    ///
    /// Returns a message when something the owner may care about changed.
    fn update(&mut self, input: &FrameInput) -> Option<Box<dyn Any + Send>>;

    /// Issue this frame's draw calls.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Screen rectangle owned by this widget.
    fn bounds(&self) -> Rect;

    /// Check if this widget reacts to input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Canvas trait for paint operations.
///
/// A minimal abstraction over a sprite batch.
pub trait Canvas {
    /// Stretch `texture` over `dest`, multiplied by `tint`.
    fn draw_texture(&mut self, texture: &SolidTexture, dest: Rect, tint: Color);

    /// Draw one line of text with its top-left corner at `position`.
    fn draw_text(&mut self, font: &dyn Font, text: &str, position: Point, color: Color);
}
