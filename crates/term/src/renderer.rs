//! ConsoleRenderer: flushes styled frames to a console stream.
//!
//! Frames are encoded into an internal buffer as crossterm commands and then
//! written in one go, so a frame never interleaves with other output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::text::{Frame, Line, Rgb, SpanStyle};

pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer on stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Write every line of `frame`, each followed by a newline.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write a single line without a trailing newline (for prompts).
    pub fn draw_inline(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a whole frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to the console.
pub fn encode_frame_into(frame: &Frame, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in frame.lines() {
        encode_line_into(line, color, out)?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode one line into `out`; styles are reset at the end of the line.
pub fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    if !color {
        for span in &line.spans {
            out.queue(Print(span.text.as_str()))?;
        }
        return Ok(());
    }

    let mut current_style: Option<SpanStyle> = None;
    for span in &line.spans {
        if current_style != Some(span.style) {
            apply_style_into(out, span.style)?;
            current_style = Some(span.style);
        }
        out.queue(Print(span.text.as_str()))?;
    }
    if current_style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(fg) => out.queue(SetForegroundColor(rgb_to_color(fg)))?,
        None => out.queue(ResetColor)?,
    };
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
