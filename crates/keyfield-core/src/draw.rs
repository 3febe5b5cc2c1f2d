//! Draw commands.
//!
//! Everything a widget renders reduces to these two primitives, mirroring a
//! sprite batch: stretched textures and single-line strings.

use crate::graphics::TextureId;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stretch a texture over a rectangle
    Texture {
        /// Texture to draw
        texture: TextureId,
        /// Destination rectangle
        dest: Rect,
        /// Color multiplied with every texel
        tint: Color,
    },

    /// Draw a single line of text
    Text {
        /// Text content
        content: String,
        /// Top-left of the first glyph
        position: Point,
        /// Text color
        color: Color,
    },
}

impl DrawCommand {
    /// Create a texture command.
    #[must_use]
    pub const fn texture(texture: TextureId, dest: Rect, tint: Color) -> Self {
        Self::Texture {
            texture,
            dest,
            tint,
        }
    }

    /// Create a text command.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, color: Color) -> Self {
        Self::Text {
            content: content.into(),
            position,
            color,
        }
    }

    /// Destination rectangle of a texture command.
    #[must_use]
    pub const fn dest(&self) -> Option<Rect> {
        match self {
            Self::Texture { dest, .. } => Some(*dest),
            Self::Text { .. } => None,
        }
    }

    /// Content of a text command.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            Self::Texture { .. } => None,
        }
    }
}
