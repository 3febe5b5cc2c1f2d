//! Blinking caret owned by a text box.

use keyfield_core::{Canvas, Color, Rect, SolidTexture};
use std::time::Duration;

/// Caret appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretStyle {
    /// Bar width in pixels
    pub thickness: f32,
    /// Time the caret stays in each blink phase (zero disables blinking)
    pub blink_interval: Duration,
    /// Bar color
    pub color: Color,
}

impl Default for CaretStyle {
    fn default() -> Self {
        Self {
            thickness: 1.0,
            blink_interval: Duration::from_millis(500),
            color: Color::BLACK,
        }
    }
}

/// On/off phase timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlinkTimer {
    interval: Duration,
    elapsed: Duration,
    on: bool,
}

impl BlinkTimer {
    const fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            on: true,
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.interval.is_zero() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed);
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.on = !self.on;
        }
    }

    fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.on = true;
    }
}

/// Text caret: a thin filled bar at the end of the text.
///
/// `visible` is the focus-driven switch; the blink phase only matters while
/// it is set. `movable` is the insertion gate the owning text box recomputes
/// from the available width.
#[derive(Debug, Clone, PartialEq)]
pub struct Caret {
    area: Rect,
    thickness: f32,
    color: Color,
    visible: bool,
    movable: bool,
    blink: BlinkTimer,
}

impl Caret {
    /// Hidden caret at `x`, spanning `y..y + height`.
    #[must_use]
    pub fn new(x: f32, y: f32, height: f32, style: CaretStyle) -> Self {
        Self {
            area: Rect::new(x, y, style.thickness, height),
            thickness: style.thickness,
            color: style.color,
            visible: false,
            movable: true,
            blink: BlinkTimer::new(style.blink_interval),
        }
    }

    /// Advance the blink timer.
    pub fn update(&mut self, elapsed: Duration) {
        self.blink.advance(elapsed);
    }

    /// Move to `x` at full thickness, restarting the blink in the "on" phase.
    pub fn move_to(&mut self, x: f32) {
        self.area = Rect::new(x, self.area.y, self.thickness, self.area.height);
        self.blink.restart();
    }

    /// Shrink to zero width at `x`. The next [`move_to`](Self::move_to)
    /// restores the configured thickness.
    pub fn collapse(&mut self, x: f32) {
        self.area = Rect::new(x, self.area.y, 0.0, self.area.height);
    }

    /// Change the vertical span, keeping x and width.
    pub fn set_vertical(&mut self, y: f32, height: f32) {
        self.area.y = y;
        self.area.height = height;
    }

    /// Show or hide the caret.
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.blink.restart();
        }
        self.visible = visible;
    }

    /// Focus-driven visibility, ignoring the blink phase.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible and in the "on" blink phase, i.e. drawn this frame.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.visible && self.blink.on
    }

    /// Allow or forbid further insertion.
    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    /// Whether text may be appended.
    #[must_use]
    pub const fn is_movable(&self) -> bool {
        self.movable
    }

    /// Current rectangle.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Set the bar color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Draw the bar if shown.
    pub fn draw(&self, canvas: &mut dyn Canvas, pixel: &SolidTexture) {
        if self.is_shown() && self.area.width > 0.0 {
            canvas.draw_texture(pixel, self.area, self.color);
        }
    }
}
