//! Framebuffer and style types for terminal rendering.
//!
//! Every write operation is total over all coordinates: anything
//! outside the buffer is silently dropped. The race relies on that near
//! the finish line, where the winning glyph's column can exceed the
//! viewport width on its final frame.

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

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
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

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to the default blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell; out-of-bounds coordinates are a no-op.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write a string left-to-right, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a string centered horizontally on row `y`.
    pub fn put_str_centered(&mut self, y: u16, s: &str, style: CellStyle) {
        let w = s.chars().count() as u16;
        let x = self.width.saturating_sub(w) / 2;
        self.put_str(x, y, s, style);
    }

    /// Fill an entire row with one character.
    pub fn hline(&mut self, y: u16, ch: char, style: CellStyle) {
        for x in 0..self.width {
            self.put_char(x, y, ch, style);
        }
    }

    /// Extract row `y` as a plain string (styles dropped). Test helper
    /// for asserting on rendered frames.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).unwrap_or_default().ch)
            .collect()
    }
}
