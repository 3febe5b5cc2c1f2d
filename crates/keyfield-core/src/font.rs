//! Font metrics supplied by the host.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// String measurement provided by the host's font system.
pub trait Font: Send + Sync {
    /// Size of `text` when drawn on a single line.
    fn measure(&self, text: &str) -> Size;

    /// Height of one line of text.
    fn line_height(&self) -> f32 {
        self.measure(" ").height
    }
}

/// Height of a line containing every printable ASCII glyph from `' '` to `'}'`.
///
/// Used to size a text box to its font when the caller does not fix a height.
#[must_use]
pub fn printable_ascii_height(font: &dyn Font) -> f32 {
    let sample: String = (32u8..126).map(char::from).collect();
    font.measure(&sample).height
}

/// Fixed-advance font, good enough for headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonospaceFont {
    /// Horizontal advance per character
    pub advance: f32,
    /// Line height
    pub line_height: f32,
}

impl MonospaceFont {
    /// Create a monospace font.
    #[must_use]
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceFont {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl Font for MonospaceFont {
    fn measure(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::new(0.0, self.line_height);
        }
        Size::new(text.chars().count() as f32 * self.advance, self.line_height)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
