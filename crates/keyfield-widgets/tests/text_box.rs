//! Integration tests for the text box: whole sessions driven frame by frame.

use keyfield_core::{
    ButtonState, DrawCommand, FrameInput, HeadlessDevice, Key, KeyboardState, MonospaceFont,
    MouseState, Point, RecordingCanvas, Rect, SolidTexture, Widget,
};
use keyfield_widgets::{TextBox, TextBoxConfig, TextBoxOptions, TextChanged, TypingState};
use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Drives a text box like a host would, one frame at a time.
struct Session {
    tb: TextBox,
    pointer: Point,
}

impl Session {
    fn new(tb: TextBox) -> Self {
        let pointer = Point::new(tb.area().x + 1.0, tb.area().y + 1.0);
        Self { tb, pointer }
    }

    fn frame(&mut self, keys: &[Key], left: bool) -> Option<Box<dyn std::any::Any + Send>> {
        let input = FrameInput::new(
            KeyboardState::from_keys(keys.iter().copied()),
            MouseState::at(self.pointer).with_left(ButtonState::from(left)),
            FRAME,
        );
        self.tb.update(&input)
    }

    fn click(&mut self) {
        self.frame(&[], true);
        self.frame(&[], false);
    }

    fn tap(&mut self, keys: &[Key]) -> Option<Box<dyn std::any::Any + Send>> {
        let msg = self.frame(keys, false);
        self.frame(&[], false);
        msg
    }
}

fn pixel() -> Arc<SolidTexture> {
    let mut device = HeadlessDevice::new();
    SolidTexture::white(&mut device).unwrap()
}

fn wide_box(password: bool) -> TextBox {
    TextBox::new(
        TextBoxOptions::new(
            pixel(),
            Rect::new(0.0, 0.0, 100_000.0, 20.0),
            Arc::new(MonospaceFont::new(8.0, 16.0)),
        )
        .password(password),
    )
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_login_form_session() {
    let mut user = Session::new(wide_box(false));
    let mut pass = Session::new(TextBox::new(
        TextBoxOptions::new(
            pixel(),
            Rect::new(0.0, 40.0, 200.0, 20.0),
            Arc::new(MonospaceFont::new(8.0, 16.0)),
        )
        .password(true),
    ));

    user.click();
    for key in [Key::B, Key::O, Key::B] {
        user.tap(&[key]);
    }
    user.tap(&[Key::LeftShift, Key::D1]);

    pass.click();
    // Clicking the password box is a click outside the user box
    user.pointer = pass.pointer;
    user.frame(&[], true);
    assert!(!user.tb.is_focused());

    for key in [Key::S, Key::D3, Key::C, Key::R, Key::D3, Key::T] {
        pass.tap(&[key]);
    }
    user.tap(&[Key::X]);

    assert_eq!(user.tb.text(), "bob1");
    assert_eq!(pass.tb.text(), "s3cr3t");
    assert_eq!(pass.tb.display_text(), "******");
}

#[test]
fn test_messages_carry_current_text() {
    let mut s = Session::new(wide_box(false));
    s.click();
    s.tap(&[Key::O]);
    let msg = s.tap(&[Key::K]).unwrap();
    assert_eq!(msg.downcast::<TextChanged>().unwrap().value, "ok");
}

#[test]
fn test_holding_backspace_empties_box() {
    let mut s = Session::new(wide_box(false));
    s.click();
    for key in [Key::A, Key::B, Key::C, Key::D, Key::E] {
        s.tap(&[key]);
    }
    // 16ms frames: 32 frames pass the delay, then one repeat every 6 frames
    for _ in 0..120 {
        s.frame(&[Key::Back], false);
    }
    assert_eq!(s.tb.text(), "");
    assert!(matches!(
        s.tb.state(),
        TypingState::Repeating { key: Key::Back, .. }
    ));
}

#[test]
fn test_frame_draws_box_caret_and_text() {
    let mut s = Session::new(wide_box(true));
    s.click();
    s.tap(&[Key::Z]);

    let mut canvas = RecordingCanvas::new();
    s.tb.draw(&mut canvas);
    let texts: Vec<&str> = canvas
        .commands()
        .iter()
        .filter_map(DrawCommand::content)
        .collect();
    assert_eq!(texts, vec!["*"]);
    assert_eq!(canvas.command_count(), 4);
}

#[test]
fn test_box_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "password = true\nmask = \"x\"\n\n[area]\nx = 0.0\ny = 0.0\nwidth = 80.0\nheight = 10.0"
    )
    .unwrap();

    let config = TextBoxConfig::load(file.path()).unwrap();
    let tb = TextBox::from_config(&config, pixel(), Arc::new(MonospaceFont::new(8.0, 16.0)))
        .unwrap();
    let mut s = Session::new(tb);
    s.click();
    s.tap(&[Key::Q]);
    assert_eq!(s.tb.display_text(), "x");
    assert_eq!(s.tb.area().height, 16.0);
}

// =============================================================================
// Property Tests
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Action {
    Type(Key),
    Erase,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (65u8..=90).prop_map(|code| Action::Type(Key::from_code(code).unwrap())),
        3 => (48u8..=57).prop_map(|code| Action::Type(Key::from_code(code).unwrap())),
        2 => Just(Action::Erase),
    ]
}

proptest! {
    #[test]
    fn prop_length_is_inserts_minus_deletes(actions in prop::collection::vec(action(), 0..60)) {
        let mut s = Session::new(wide_box(false));
        s.click();

        let mut expected = 0usize;
        for action in actions {
            match action {
                Action::Type(key) => {
                    s.tap(&[key]);
                    expected += 1;
                }
                Action::Erase => {
                    s.tap(&[Key::Back]);
                    expected = expected.saturating_sub(1);
                }
            }
        }
        prop_assert_eq!(s.tb.text().chars().count(), expected);
    }

    #[test]
    fn prop_mask_matches_text(actions in prop::collection::vec(action(), 0..60), width in 40.0f32..400.0) {
        let tb = TextBox::new(
            TextBoxOptions::new(pixel(), Rect::new(0.0, 0.0, width, 20.0), Arc::new(MonospaceFont::new(8.0, 16.0)))
                .password(true),
        );
        let mut s = Session::new(tb);
        s.click();

        for action in actions {
            match action {
                Action::Type(key) => s.tap(&[key]),
                Action::Erase => s.tap(&[Key::Back]),
            };
            prop_assert_eq!(s.tb.display_text().chars().count(), s.tb.text().chars().count());
            prop_assert!(s.tb.display_text().chars().all(|c| c == '*'));
        }
    }

    #[test]
    fn prop_caret_stays_inside(actions in prop::collection::vec(action(), 0..80)) {
        let tb = TextBox::new(TextBoxOptions::new(
            pixel(),
            Rect::new(10.0, 0.0, 120.0, 20.0),
            Arc::new(MonospaceFont::new(8.0, 16.0)),
        ));
        let mut s = Session::new(tb);
        s.click();

        for action in actions {
            match action {
                Action::Type(key) => s.tap(&[key]),
                Action::Erase => s.tap(&[Key::Back]),
            };
            prop_assert!(s.tb.caret().area().right() < s.tb.area().right());
        }
    }
}
