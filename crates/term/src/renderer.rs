//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The race clears and redraws the whole screen every frame, so this
//! renderer does full-frame flushes only: commands are queued into an
//! internal buffer and written to stdout in one shot, which is what
//! makes a frame visually atomic.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Anything a frame can be presented on.
///
/// The real implementation is [`TerminalRenderer`]; tests substitute a
/// capturing fake so the race loop can run headless.
pub trait Surface {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen, hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
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

impl Surface for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Each row starts from an absolute cursor move, so a wide glyph that
/// drifts the cursor within one row cannot skew the rows below it.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

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
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself can't be validated in unit tests, but the
    // encoding path can run against an in-memory buffer.
    #[test]
    fn encodes_a_small_frame() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_char(2, 1, 'C', CellStyle::default().bold());

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('B'));
        assert!(text.contains('C'));
    }

    #[test]
    fn style_conversion_round_trips() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
