//! `TextBox` widget: a single-line, append-only text field.
//!
//! The box is polled once per frame. Clicking inside focuses it, clicking
//! anywhere else releases focus. While focused, freshly pressed printable keys
//! are appended, backspace deletes from the end, and the most recent key held
//! auto-repeats after [`KeyTiming::initial_delay`](crate::KeyTiming).

use crate::caret::{Caret, CaretStyle};
use crate::key_repeat::{is_control_key, KeyRepeat, KeyTiming, TypingState};
use keyfield_core::{
    printable_ascii_height, Canvas, Color, Font, FrameInput, Key, KeyboardState, Rect,
    SolidTexture, TypeId, Widget,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Border drawn around the inner area, in pixels per side.
const BORDER_WIDTH: f32 = 2.0;

/// Message emitted when the text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChanged {
    /// The new text value
    pub value: String,
}

/// Message emitted when the box gains or loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChanged {
    /// Whether the box now accepts keyboard input
    pub focused: bool,
}

/// Colors, masking and timing of a text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxStyle {
    /// Border color
    pub border_color: Color,
    /// Inner fill color while the pointer is elsewhere
    pub fill_color: Color,
    /// Text (and caret) color
    pub text_color: Color,
    /// Inner fill color while hovered
    pub hover_color: Color,
    /// Inner fill color while read-only
    pub disabled_color: Color,
    /// Character shown per character in password mode
    pub mask: char,
    /// Auto-repeat timing
    pub timing: KeyTiming,
    /// Caret thickness and blink rate
    pub caret: CaretStyle,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            border_color: Color::BLACK,
            fill_color: Color::WHITE,
            text_color: Color::BLACK,
            hover_color: Color::LIGHT_BLUE,
            disabled_color: Color::GRAY,
            mask: '*',
            timing: KeyTiming::default(),
            caret: CaretStyle::default(),
        }
    }
}

/// Everything needed to build a [`TextBox`].
#[derive(Clone)]
pub struct TextBoxOptions {
    pixel: Arc<SolidTexture>,
    area: Rect,
    font: Arc<dyn Font>,
    style: TextBoxStyle,
    password: bool,
    preserve_height: bool,
}

impl TextBoxOptions {
    /// Options for a plain box at `area`, sized to the font's height.
    #[must_use]
    pub fn new(pixel: Arc<SolidTexture>, area: Rect, font: Arc<dyn Font>) -> Self {
        Self {
            pixel,
            area,
            font,
            style: TextBoxStyle::default(),
            password: false,
            preserve_height: false,
        }
    }

    /// Set colors, mask and timing.
    #[must_use]
    pub const fn style(mut self, style: TextBoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.style.border_color = color;
        self
    }

    /// Set the fill color.
    #[must_use]
    pub const fn fill_color(mut self, color: Color) -> Self {
        self.style.fill_color = color;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.style.text_color = color;
        self
    }

    /// Mask the displayed text.
    #[must_use]
    pub const fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Keep the given height instead of fitting it to the font.
    #[must_use]
    pub const fn preserve_height(mut self, preserve: bool) -> Self {
        self.preserve_height = preserve;
        self
    }
}

/// Single-line text field with a blinking caret, optional password masking
/// and key auto-repeat.
pub struct TextBox {
    area: Rect,
    font: Arc<dyn Font>,
    pixel: Arc<SolidTexture>,
    style: TextBoxStyle,
    /// Fill currently drawn (hover and read-only tints land here)
    fill_color: Color,
    read_only: bool,
    password: bool,
    text: String,
    /// One mask character per character of `text`, password mode only
    masked: String,
    caret: Caret,
    typing: KeyRepeat,
    /// Keyboard as of the last fully processed focused frame
    previous_keys: KeyboardState,
    test_id_value: Option<String>,
}

impl TextBox {
    /// Create a text box.
    #[must_use]
    pub fn new(options: TextBoxOptions) -> Self {
        let TextBoxOptions {
            pixel,
            mut area,
            font,
            style,
            password,
            preserve_height,
        } = options;

        if !preserve_height {
            area.height = printable_ascii_height(font.as_ref());
        }
        let caret_style = CaretStyle {
            color: style.text_color,
            ..style.caret
        };

        Self {
            area,
            font,
            pixel,
            fill_color: style.fill_color,
            read_only: false,
            password,
            text: String::new(),
            masked: String::new(),
            caret: Caret::new(area.x, area.y, area.height, caret_style),
            typing: KeyRepeat::new(style.timing),
            previous_keys: KeyboardState::new(),
            test_id_value: None,
            style,
        }
    }

    /// Start read-only.
    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Plain text entered so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text as drawn: the mask in password mode, the plain text otherwise.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.password {
            &self.masked
        } else {
            &self.text
        }
    }

    /// Whether the text is masked.
    #[must_use]
    pub const fn is_password(&self) -> bool {
        self.password
    }

    /// Whether input is ignored.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Ignore (or accept) input. Leaving read-only restores the fill color
    /// on the next frame.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Whether the box accepts keyboard input.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.typing.is_focused()
    }

    /// Current typing state.
    #[must_use]
    pub const fn state(&self) -> TypingState {
        self.typing.state()
    }

    /// The caret.
    #[must_use]
    pub const fn caret(&self) -> &Caret {
        &self.caret
    }

    /// Empty the text and collapse the caret to the left edge.
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.masked.clear();
        self.caret.collapse(self.area.x);
        debug!("text box cleared");
    }

    /// Inner area, excluding the border.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Move or resize the box. The caret follows the text.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.caret.set_vertical(area.y, area.height);
        self.place_caret();
    }

    /// Border color.
    #[must_use]
    pub const fn border_color(&self) -> Color {
        self.style.border_color
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
    }

    /// Fill color as currently drawn.
    #[must_use]
    pub const fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Set the fill color, including the one restored when the pointer leaves.
    pub fn set_fill_color(&mut self, color: Color) {
        self.style.fill_color = color;
        self.fill_color = color;
    }

    /// Text color.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        self.style.text_color
    }

    /// Set the text and caret color.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.caret.set_color(color);
    }

    /// Remove the last character. Returns `false` when already empty.
    fn backspace(&mut self) -> bool {
        if self.text.pop().is_none() {
            return false;
        }
        if self.password {
            self.masked.pop();
        }
        true
    }

    /// Append `ch` unless the caret has hit the right edge.
    fn insert(&mut self, ch: char) -> bool {
        if !self.caret.is_movable() {
            return false;
        }
        self.text.push(ch);
        if self.password {
            self.masked.push(self.style.mask);
        }
        true
    }

    fn place_caret(&mut self) {
        let width = self.font.measure(self.display_text()).width;
        self.caret.move_to(self.area.x + width);
    }

    fn hover(&mut self, inside: bool) {
        self.fill_color = if inside {
            self.style.hover_color
        } else {
            self.style.fill_color
        };
    }

    /// Apply a held left button. Returns the new focus when it changed.
    fn focus_click(&mut self, inside: bool) -> Option<bool> {
        let was_focused = self.typing.is_focused();
        if inside {
            self.typing.focus();
        } else {
            self.typing.blur();
        }
        self.caret.set_visible(inside);
        (was_focused != inside).then(|| {
            debug!(focused = inside, "text box focus changed");
            inside
        })
    }

    /// Recompute whether the caret may advance by the width of `last`.
    fn update_movable(&mut self, last: Option<Key>) {
        let label_width = last.map_or(0.0, |key| self.font.measure(key.label()).width);
        let movable = self.caret.area().right() + label_width < self.area.right();
        if movable != self.caret.is_movable() {
            debug!(movable, caret_x = self.caret.area().x, "caret edge gate changed");
        }
        self.caret.set_movable(movable);
    }

    /// Character produced by an auto-repeat of `key`.
    fn repeat_char(key: Key) -> Option<char> {
        match key {
            Key::Space => Some(' '),
            key if key.is_printable_code() => Some(char::from(key.code() + 32)),
            _ => None,
        }
    }

    /// Character produced by a fresh press of `key`.
    fn press_char(key: Key, shift: bool) -> Option<char> {
        match key {
            Key::Space => Some(' '),
            key if !key.is_printable_code() => None,
            key if shift || key.is_digit() => Some(char::from(key.code())),
            key => Some(char::from(key.code() + 32)),
        }
    }

    /// Process the keyboard for a focused frame. Returns whether the text
    /// changed.
    fn type_keys(&mut self, keyboard: &KeyboardState, elapsed: Duration) -> bool {
        let last = keyboard.last_pressed();
        self.typing.observe(last);
        let shift = keyboard.is_shift_down();

        // The previous snapshot is left as is, so keys pressed under a
        // control key count as fresh once it is released.
        if last.is_some_and(is_control_key) {
            return false;
        }

        self.update_movable(last);

        let mut edited = false;
        if let Some(key) = self.typing.advance(elapsed) {
            trace!(?key, "key repeat");
            edited |= match key {
                Key::Back => self.backspace(),
                key => Self::repeat_char(key).is_some_and(|ch| self.insert(ch)),
            };
        }

        let fresh: Vec<Key> = keyboard.newly_pressed(&self.previous_keys).collect();
        for key in fresh {
            edited |= match key {
                Key::Back => self.backspace(),
                key => Self::press_char(key, shift).is_some_and(|ch| self.insert(ch)),
            };
        }
        self.previous_keys = *keyboard;

        if edited {
            self.place_caret();
            debug!(len = self.text.chars().count(), "text box edited");
        }
        edited
    }
}

impl Widget for TextBox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn update(&mut self, input: &FrameInput) -> Option<Box<dyn Any + Send>> {
        if self.read_only {
            self.fill_color = self.style.disabled_color;
            return None;
        }

        let inside = self.area.contains_point(&input.mouse.position);
        self.hover(inside);
        self.caret.update(input.elapsed);

        let focus = if input.mouse.left.is_pressed() {
            self.focus_click(inside)
        } else {
            None
        };

        if self.typing.is_focused() && self.type_keys(&input.keyboard, input.elapsed) {
            return Some(Box::new(TextChanged {
                value: self.text.clone(),
            }));
        }
        focus.map(|focused| Box::new(FocusChanged { focused }) as Box<dyn Any + Send>)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_texture(
            &self.pixel,
            self.area.expand(BORDER_WIDTH),
            self.style.border_color,
        );
        canvas.draw_texture(&self.pixel, self.area, self.fill_color);
        self.caret.draw(canvas, &self.pixel);
        canvas.draw_text(
            self.font.as_ref(),
            self.display_text(),
            self.area.origin(),
            self.style.text_color,
        );
    }

    fn bounds(&self) -> Rect {
        self.area
    }

    fn is_interactive(&self) -> bool {
        !self.read_only
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
