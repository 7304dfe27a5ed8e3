//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is written in full from the top-left corner; the previous
//! frame is simply overwritten, never cleared or diffed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            release_events: false,
        }
    }

    /// Whether the terminal agreed to report key releases.
    ///
    /// Only meaningful after [`TerminalRenderer::enter`].
    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        if self.release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write the whole framebuffer to the terminal.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame overwrite into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Each row is positioned explicitly so a narrower terminal crops instead of
/// wrapping.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
