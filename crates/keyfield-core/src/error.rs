//! Error types for keyfield-core.

use thiserror::Error;

/// Errors raised by a [`GraphicsDevice`](crate::GraphicsDevice).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphicsError {
    /// The device refused to allocate another texture.
    #[error("texture budget exhausted ({limit} textures)")]
    TextureBudgetExhausted {
        /// Maximum number of textures the device hands out
        limit: usize,
    },

    /// A texture with no pixels was requested.
    #[error("cannot create a {width}x{height} texture")]
    EmptyTexture {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}
