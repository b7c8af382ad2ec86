//! Turning strings into pixel cells.
//!
//! Rasterization is pure: it produces [`GlyphCell`]s in device coordinates
//! and never touches a framebuffer. [`draw_cells`] (or drawing a [`TextRun`])
//! is the separate step that writes those cells in a colour.

use super::glyph::{classify, is_set, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::render::Drawable;

/// Horizontal advance per character: the glyph width plus one blank column.
pub const PITCH: i32 = 6;

/// Vertical advance per character in stacked text.
pub const STACK_PITCH: i32 = 12;

/// A single lit 1x1 device pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    /// Device column.
    pub x: i32,
    /// Device row.
    pub y: i32,
}

/// Lay out `text` left to right starting at (`origin_x`, `origin_y`), the
/// top-left corner of the first glyph.
#[must_use]
pub fn rasterize(text: &str, origin_x: i32, origin_y: i32) -> Vec<GlyphCell> {
    let mut cells = Vec::new();
    let mut pen_x = origin_x;
    for c in text.chars() {
        push_glyph(&mut cells, c, pen_x, origin_y);
        pen_x = pen_x.saturating_add(PITCH);
    }
    cells
}

/// Lay out `text` top to bottom, one character per line, each
/// [`STACK_PITCH`] below the previous.
#[must_use]
pub fn rasterize_stacked(text: &str, origin_x: i32, origin_y: i32) -> Vec<GlyphCell> {
    let mut cells = Vec::new();
    let mut pen_y = origin_y;
    for c in text.chars() {
        push_glyph(&mut cells, c, origin_x, pen_y);
        pen_y = pen_y.saturating_add(STACK_PITCH);
    }
    cells
}

fn push_glyph(cells: &mut Vec<GlyphCell>, c: char, x: i32, y: i32) {
    let glyph = classify(c).glyph();
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if is_set(glyph, col, row) {
                cells.push(GlyphCell {
                    x: x.saturating_add(col as i32),
                    y: y.saturating_add(row as i32),
                });
            }
        }
    }
}

/// Advance width of `text` in device pixels.
#[must_use]
pub fn text_width(text: &str) -> i32 {
    i32::try_from(text.chars().count()).map_or(i32::MAX, |n| n.saturating_mul(PITCH))
}

/// Left edge that centres `text` inside a span of `span` pixels.
#[must_use]
pub fn centered_x(text: &str, span: u32) -> i32 {
    let span = i32::try_from(span).unwrap_or(i32::MAX);
    (span - text_width(text)) / 2
}

/// Write cells into `fb`. Cells outside the buffer are skipped.
pub fn draw_cells(fb: &mut Framebuffer, cells: &[GlyphCell], color: Rgba) {
    for cell in cells {
        if let (Ok(x), Ok(y)) = (u32::try_from(cell.x), u32::try_from(cell.y)) {
            fb.set_pixel(x, y, color);
        }
    }
}

/// A positioned string that can be drawn like any other primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Content.
    pub text: String,
    /// Stack characters vertically instead of horizontally.
    pub stacked: bool,
}

impl TextRun {
    /// A horizontal run.
    #[must_use]
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), stacked: false }
    }

    /// A vertical run.
    #[must_use]
    pub fn stacked(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), stacked: true }
    }

    /// Cells this run lights.
    #[must_use]
    pub fn cells(&self) -> Vec<GlyphCell> {
        if self.stacked {
            rasterize_stacked(&self.text, self.x, self.y)
        } else {
            rasterize(&self.text, self.x, self.y)
        }
    }
}

impl Drawable for TextRun {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_cells(fb, &self.cells(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_cells() {
        assert!(rasterize("", 10, 10).is_empty());
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_space_and_unknown_have_no_cells() {
        assert!(rasterize("  ?|", 0, 0).is_empty());
    }

    #[test]
    fn test_dash_is_one_row_of_five() {
        let cells = rasterize("-", 100, 200);
        let expected: Vec<GlyphCell> = (0..5).map(|col| GlyphCell { x: 100 + col, y: 203 }).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_second_glyph_is_offset_by_pitch() {
        let single = rasterize("1", 0, 0);
        let pair = rasterize(" 1", 0, 0);
        let shifted: Vec<GlyphCell> =
            single.iter().map(|c| GlyphCell { x: c.x + PITCH, y: c.y }).collect();
        assert_eq!(pair, shifted);
    }

    #[test]
    fn test_cells_stay_inside_glyph_boxes() {
        let text = "Hello: 12.5";
        let cells = rasterize(text, 7, 3);
        for cell in &cells {
            let offset = cell.x - 7;
            assert!(offset % PITCH < GLYPH_WIDTH as i32, "cell {cell:?} in the gap column");
            assert!((3..3 + GLYPH_HEIGHT as i32).contains(&cell.y));
        }
        assert!(cells.iter().all(|c| c.x < 7 + text_width(text)));
    }

    #[test]
    fn test_stacked_advances_vertically() {
        let cells = rasterize_stacked("--", 20, 0);
        let rows: Vec<i32> = cells.iter().map(|c| c.y).collect();
        assert!(rows.iter().take(5).all(|&y| y == 3));
        assert!(rows.iter().skip(5).all(|&y| y == 3 + STACK_PITCH));
    }

    #[test]
    fn test_centered_x() {
        assert_eq!(centered_x("ABCD", 100), 38);
    }

    #[test]
    fn test_draw_cells_clips_negative_cells() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        draw_cells(&mut fb, &rasterize("-", -3, -3), Rgba::BLACK);
        // row 3 of the dash lands on y = 0, columns -3..=1 keep two pixels
        assert_eq!(fb.count_pixels(Rgba::BLACK), 2);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_text_run_drawable() {
        let mut fb = Framebuffer::new(40, 20).unwrap();
        fb.clear(Rgba::WHITE);
        let run = TextRun::new(2, 2, "=");
        run.draw(&mut fb, Rgba::RED);
        assert_eq!(fb.count_pixels(Rgba::RED), run.cells().len());
        assert_eq!(run.cells().len(), 10);
    }

    #[test]
    fn test_stacked_run_matches_stacked_cells() {
        let run = TextRun::stacked(20, 290, "Temp");
        assert_eq!(run.cells(), rasterize_stacked("Temp", 20, 290));
        assert_ne!(run.cells(), TextRun::new(20, 290, "Temp").cells());
    }
}
