//! Styled text types for console rendering.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-kind piece color.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Minimal per-span styling. `fg == None` keeps the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const PLAIN: SpanStyle = SpanStyle {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(rgb: Rgb) -> Self {
        Self {
            fg: Some(rgb),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push(text, SpanStyle::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::new().push(text, style)
    }

    pub fn push(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
        self
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A block of lines flushed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::new());
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Unstyled text, one `\n`-terminated line per [`Line`].
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_joins_spans() {
        let line = Line::plain("Next: ").push("[T 3]", SpanStyle::fg(piece_color(PieceKind::T)));
        assert_eq!(line.text(), "Next: [T 3]");
        assert_eq!(line.spans.len(), 2);
    }

    #[test]
    fn frame_to_plain_terminates_every_line() {
        let mut frame = Frame::new();
        frame.line(Line::plain("a")).blank().line(Line::plain("b"));
        assert_eq!(frame.to_plain(), "a\n\nb\n");
    }

    #[test]
    fn piece_colors_are_distinct() {
        let colors: Vec<Rgb> = PieceKind::ALL.iter().map(|k| piece_color(*k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
