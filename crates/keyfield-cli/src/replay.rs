//! Headless replay of a frame script through a text box.

use crate::script::Script;
use anyhow::{Context, Result};
use keyfield_core::{
    DrawCommand, HeadlessDevice, MonospaceFont, RecordingCanvas, Rect, SolidTexture, Widget,
};
use keyfield_widgets::{FocusChanged, TextBox, TextBoxConfig, TextChanged};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Report {
    pub(crate) text: String,
    pub(crate) display: String,
    pub(crate) focused: bool,
    pub(crate) frames: usize,
    pub(crate) edits: usize,
    pub(crate) focus_changes: usize,
    pub(crate) caret: Rect,
    pub(crate) commands: Vec<DrawCommand>,
}

/// Build the box described by `config`, feed it every frame of `script`,
/// then draw it once.
pub(crate) fn replay(config: &TextBoxConfig, script: &Script, font: MonospaceFont) -> Result<Report> {
    let mut device = HeadlessDevice::new();
    let pixel = SolidTexture::white(&mut device).context("failed to allocate the fill texture")?;
    let mut text_box = TextBox::from_config(config, pixel, Arc::new(font))?;

    let inputs = script.inputs();
    let mut edits = 0;
    let mut focus_changes = 0;
    for (frame, input) in inputs.iter().enumerate() {
        let Some(message) = text_box.update(input) else {
            continue;
        };
        if message.is::<TextChanged>() {
            edits += 1;
        } else if let Some(change) = message.downcast_ref::<FocusChanged>() {
            focus_changes += 1;
            debug!(frame, focused = change.focused, "focus changed");
        }
    }

    let mut canvas = RecordingCanvas::new();
    text_box.draw(&mut canvas);

    Ok(Report {
        text: text_box.text().to_owned(),
        display: text_box.display_text().to_owned(),
        focused: text_box.is_focused(),
        frames: inputs.len(),
        edits,
        focus_changes,
        caret: text_box.caret().area(),
        commands: canvas.take_commands(),
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text:    {:?}", self.text)?;
        writeln!(f, "Display: {:?}", self.display)?;
        writeln!(f, "Focused: {}", if self.focused { "yes" } else { "no" })?;
        writeln!(
            f,
            "Frames:  {} ({} edits, {} focus changes)",
            self.frames, self.edits, self.focus_changes
        )?;
        writeln!(
            f,
            "Caret:   x={} y={} {}x{}",
            self.caret.x, self.caret.y, self.caret.width, self.caret.height
        )?;
        writeln!(f, "Draw commands:")?;
        for command in &self.commands {
            match command {
                DrawCommand::Texture {
                    texture,
                    dest,
                    tint,
                } => writeln!(
                    f,
                    "  texture #{} at ({}, {}) {}x{} {}",
                    texture.0,
                    dest.x,
                    dest.y,
                    dest.width,
                    dest.height,
                    tint.to_hex()
                )?,
                DrawCommand::Text {
                    content,
                    position,
                    color,
                } => writeln!(
                    f,
                    "  text {:?} at ({}, {}) {}",
                    content,
                    position.x,
                    position.y,
                    color.to_hex()
                )?,
            }
        }
        Ok(())
    }
}
