//! Graphics device boundary and the shared solid-color texture.
//!
//! Every rectangle a widget draws is the same 1x1 white texture stretched and
//! tinted. The host creates that texture once and hands an `Arc` to each
//! widget, instead of each widget type caching it in a static.

use crate::color::Color;
use crate::error::GraphicsError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Handle to a texture owned by a [`GraphicsDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Texture allocation, the only thing widgets need from the graphics device.
pub trait GraphicsDevice {
    /// Allocate a `width` x `height` texture filled with `fill`.
    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        fill: Color,
    ) -> Result<TextureId, GraphicsError>;
}

/// A 1x1 texture of a single color, stretched to draw filled rectangles.
#[derive(Debug, PartialEq)]
pub struct SolidTexture {
    id: TextureId,
    color: Color,
}

impl SolidTexture {
    /// Allocate a white 1x1 texture on `device`.
    ///
    /// Tinting white by the draw color yields that color exactly, so one
    /// texture serves every fill in the process.
    pub fn white(device: &mut dyn GraphicsDevice) -> Result<Arc<Self>, GraphicsError> {
        let id = device.create_texture(1, 1, Color::WHITE)?;
        Ok(Arc::new(Self {
            id,
            color: Color::WHITE,
        }))
    }

    /// Device handle.
    #[must_use]
    pub const fn id(&self) -> TextureId {
        self.id
    }

    /// Texel color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Record of one texture created by a [`HeadlessDevice`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureInfo {
    /// Handle returned to the caller
    pub id: TextureId,
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    /// Fill color
    pub fill: Color,
}

/// In-memory device for hosts without a GPU and for tests.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    textures: Vec<TextureInfo>,
    budget: Option<usize>,
}

impl HeadlessDevice {
    /// Device with no allocation limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Device that fails once `limit` textures exist.
    #[must_use]
    pub fn with_budget(limit: usize) -> Self {
        Self {
            textures: Vec::new(),
            budget: Some(limit),
        }
    }

    /// Textures created so far.
    #[must_use]
    pub fn textures(&self) -> &[TextureInfo] {
        &self.textures
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        fill: Color,
    ) -> Result<TextureId, GraphicsError> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::EmptyTexture { width, height });
        }
        if let Some(limit) = self.budget {
            if self.textures.len() >= limit {
                return Err(GraphicsError::TextureBudgetExhausted { limit });
            }
        }

        let id = TextureId(self.textures.len() as u32);
        self.textures.push(TextureInfo {
            id,
            width,
            height,
            fill,
        });
        Ok(id)
    }
}
