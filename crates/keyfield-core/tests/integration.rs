//! Integration tests for keyfield-core.
//!
//! These tests verify the public API works correctly end-to-end.

use keyfield_core::{
    printable_ascii_height, ButtonState, Canvas, Color, DrawCommand, FrameInput, HeadlessDevice,
    Key, KeyboardState, MonospaceFont, MouseState, Point, RecordingCanvas, Rect, SolidTexture,
};
use std::time::Duration;

// =============================================================================
// Input Integration Tests
// =============================================================================

#[test]
fn test_frame_input_round_trip() {
    let keyboard = KeyboardState::from_keys([Key::H, Key::I]);
    let mouse = MouseState::at(Point::new(12.0, 8.0)).with_left(ButtonState::Pressed);
    let frame = FrameInput::new(keyboard, mouse, Duration::from_millis(16));

    assert_eq!(frame.keyboard.last_pressed(), Some(Key::I));
    assert!(frame.mouse.left.is_pressed());
    assert_eq!(frame.elapsed, Duration::from_millis(16));
}

#[test]
fn test_edge_detection_between_frames() {
    let first = KeyboardState::from_keys([Key::A]);
    let second = KeyboardState::from_keys([Key::A, Key::Space, Key::LeftShift]);

    let fresh: Vec<Key> = second.newly_pressed(&first).collect();
    assert_eq!(fresh, vec![Key::Space, Key::LeftShift]);
    assert!(second.newly_pressed(&second).next().is_none());
}

#[test]
fn test_key_deserializes_by_name() {
    let keys: Vec<Key> = serde_json::from_str(r#"["A", "Back", "LeftShift"]"#).unwrap();
    assert_eq!(keys, vec![Key::A, Key::Back, Key::LeftShift]);
}

// =============================================================================
// Drawing Integration Tests
// =============================================================================

#[test]
fn test_shared_texture_across_canvases() {
    let mut device = HeadlessDevice::new();
    let pixel = SolidTexture::white(&mut device).expect("device has room");
    let font = MonospaceFont::new(6.0, 12.0);

    let mut a = RecordingCanvas::new();
    let mut b = RecordingCanvas::new();
    a.draw_texture(&pixel, Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
    b.draw_texture(&pixel, Rect::new(5.0, 5.0, 1.0, 1.0), Color::WHITE);
    b.draw_text(&font, "abc", Point::new(5.0, 5.0), Color::BLACK);

    let id_a = match &a.commands()[0] {
        DrawCommand::Texture { texture, .. } => *texture,
        DrawCommand::Text { .. } => panic!("expected texture"),
    };
    let id_b = match &b.commands()[0] {
        DrawCommand::Texture { texture, .. } => *texture,
        DrawCommand::Text { .. } => panic!("expected texture"),
    };
    assert_eq!(id_a, id_b);
    assert_eq!(device.textures().len(), 1);
}

#[test]
fn test_font_height_from_printable_ascii() {
    let font = MonospaceFont::new(9.0, 21.0);
    assert_eq!(printable_ascii_height(&font), 21.0);
}
