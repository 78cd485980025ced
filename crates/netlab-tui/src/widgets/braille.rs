//! Dot-matrix drawing on braille characters.
//!
//! The charts and the campus map plot into one of these canvases and blit
//! the result into the frame buffer. A character cell carries a 2x4 grid of
//! braille dots, so a canvas of `width x height` cells exposes a
//! `width*2 x height*4` dot grid that is close to square on most terminals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Bit for the braille dot at `(x % 2, y % 4)` within a cell.
///
/// Braille puts dots 1-3 and 7 down the left column (0x01, 0x02, 0x04,
/// 0x40) and dots 4-6 and 8 down the right (0x08, 0x10, 0x20, 0x80); the
/// glyph for a cell is U+2800 plus the OR of its dot bits.
fn dot_bit(x: usize, y: usize) -> u8 {
    const LEFT: [u8; 4] = [0x01, 0x02, 0x04, 0x40];
    const RIGHT: [u8; 4] = [0x08, 0x10, 0x20, 0x80];
    if x % 2 == 0 {
        LEFT[y % 4]
    } else {
        RIGHT[y % 4]
    }
}

/// A monochrome dot canvas rendered as braille glyphs.
///
/// Dot coordinates run x in `0..width*2` and y in `0..height*4` with the
/// origin at the top left. One canvas holds one color; overlapping series
/// each draw into their own canvas and blit in turn.
pub(crate) struct BrailleCanvas {
    dots: Vec<u8>,
    width: usize,
    height: usize,
}

impl BrailleCanvas {
    /// A blank canvas of `width x height` character cells.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            dots: vec![0; width * height],
            width,
            height,
        }
    }

    #[cfg(test)]
    fn cell_bits(&self, col: usize, row: usize) -> u8 {
        self.dots[row * self.width + col]
    }

    /// Turn on the dot at `(x, y)`. Dots outside the canvas are dropped.
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        let (col, row) = (x / 2, y / 4);
        if col < self.width && row < self.height {
            self.dots[row * self.width + col] |= dot_bit(x, y);
        }
    }

    /// Plot a straight segment between two dot positions (Bresenham).
    ///
    /// Endpoints may lie off the canvas; whatever falls inside is drawn.
    pub(crate) fn line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blit every non-empty cell into `buf` as a braille glyph in `color`.
    ///
    /// Cells with no dots are left untouched, so layers blitted earlier show
    /// through.
    pub(crate) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, color: Color) {
        let style = Style::default().fg(color);
        for row in 0..self.height.min(area.height as usize) {
            for col in 0..self.width.min(area.width as usize) {
                let bits = self.dots[row * self.width + col];
                if bits == 0 {
                    continue;
                }
                let glyph = char::from_u32(0x2800 + u32::from(bits)).unwrap_or('\u{2800}');
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    cell.set_char(glyph).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_maps_dots_to_cell_bits() {
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.set(0, 0);
        assert_eq!(canvas.cell_bits(0, 0), 0x01);

        canvas.set(1, 3);
        assert_eq!(canvas.cell_bits(0, 0), 0x01 | 0x80);

        // Second cell row, second cell column
        canvas.set(2, 4);
        assert_eq!(canvas.cell_bits(1, 1), 0x01);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set(100, 0);
        canvas.set(0, 100);
        assert!(canvas.dots.iter().all(|&bits| bits == 0));
    }

    #[test]
    fn test_horizontal_line_fills_a_dot_row() {
        let mut canvas = BrailleCanvas::new(4, 1);
        canvas.line(0, 0, 7, 0);
        for col in 0..4 {
            assert_eq!(canvas.cell_bits(col, 0), 0x01 | 0x08, "column {col}");
        }
    }

    #[test]
    fn test_line_clips_outside_the_canvas() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.line(-4, 0, 3, 0);
        assert_eq!(canvas.cell_bits(0, 0), 0x01 | 0x08);
        assert_eq!(canvas.cell_bits(1, 0), 0x01 | 0x08);
    }

    #[test]
    fn test_render_writes_braille_characters() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set(0, 0);

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        canvas.render_to_buffer(&mut buf, area, Color::Red);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "\u{2801}");
        // Empty cells are left untouched
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_diagonal_line_touches_both_corners() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.line(0, 0, 3, 3);
        assert_ne!(canvas.cell_bits(0, 0) & 0x01, 0);
        assert_ne!(canvas.cell_bits(1, 0) & 0x80, 0);
    }
}
