//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Frames are much larger than a terminal, so each character stands for a
//! block of pixels. A block is represented by its darkest pixel: plot
//! content is dark ink on a pale background, and averaging would wash out
//! one-pixel lines and glyph strokes.
//!
//! - ASCII: grayscale ramp ` .:-=+*#%@`
//! - Unicode: `▀` with 24-bit foreground/background, two pixel rows per line
//! - ANSI: coloured spaces, one block per character

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    #[default]
    UnicodeHalfBlock,
    /// Background-coloured spaces with ANSI 24-bit color
    AnsiTrueColor,
}

/// Colours of one half-block character: upper and lower pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBlockCell {
    /// Foreground of `▀`.
    pub top: Rgba,
    /// Background behind `▀`.
    pub bottom: Rgba,
}

/// Darkest pixel in the half-open block `[x0, x1) x [y0, y1)`.
///
/// Empty or out-of-range blocks sample the nearest pixel instead, so every
/// call returns a colour as long as the frame is non-empty.
#[must_use]
pub fn sample_block(fb: &Framebuffer, x0: u32, y0: u32, x1: u32, y1: u32) -> Rgba {
    let max_x = fb.width() - 1;
    let max_y = fb.height() - 1;
    let (x0, y0) = (x0.min(max_x), y0.min(max_y));
    let (x1, y1) = (x1.clamp(x0 + 1, max_x + 1), y1.clamp(y0 + 1, max_y + 1));

    let mut darkest = fb.get_pixel(x0, y0).unwrap_or(Rgba::BLACK);
    let mut darkest_luma = darkest.luma();
    for y in y0..y1 {
        for x in x0..x1 {
            if let Some(pixel) = fb.get_pixel(x, y) {
                let luma = pixel.luma();
                if luma < darkest_luma {
                    darkest = pixel;
                    darkest_luma = luma;
                }
            }
        }
    }
    darkest
}

/// Start of block `index` when `extent` pixels are split into `count` blocks.
fn block_edge(index: u32, count: u32, extent: u32) -> u32 {
    (u64::from(index) * u64::from(extent) / u64::from(count.max(1))) as u32
}

/// Down-sample `fb` onto a `cols` x `rows` grid of half-block characters,
/// row-major.
#[must_use]
pub fn half_block_cells(fb: &Framebuffer, cols: u32, rows: u32) -> Vec<HalfBlockCell> {
    let sub_rows = rows * 2;
    let mut cells = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        let y0 = block_edge(row * 2, sub_rows, fb.height());
        let y_mid = block_edge(row * 2 + 1, sub_rows, fb.height());
        let y1 = block_edge(row * 2 + 2, sub_rows, fb.height());
        for col in 0..cols {
            let x0 = block_edge(col, cols, fb.width());
            let x1 = block_edge(col + 1, cols, fb.width());
            cells.push(HalfBlockCell {
                top: sample_block(fb, x0, y0, x1, y_mid),
                bottom: sample_block(fb, x0, y_mid, x1, y1),
            });
        }
    }
    cells
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters. The line count follows from the
    /// frame's aspect ratio.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::UnicodeHalfBlock => self.render_unicode_half_block(fb),
            TerminalMode::AnsiTrueColor => self.render_ansi_true_color(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.compute_dimensions(fb, 2.0);
        let mut output = String::with_capacity((cols + 1) as usize * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let pixel = Self::block(fb, col, row, cols, rows);
                output.push(Self::ASCII_RAMP[Self::luma_to_index(pixel.luma())]);
            }
            output.push('\n');
        }

        output
    }

    fn render_unicode_half_block(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.compute_dimensions(fb, 2.0);
        let mut output = String::with_capacity((cols * 40 + 5) as usize * rows as usize);

        for line in half_block_cells(fb, cols, rows).chunks(cols as usize) {
            for cell in line {
                let (top, bottom) = (cell.top, cell.bottom);
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    fn render_ansi_true_color(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.compute_dimensions(fb, 2.0);
        let mut output = String::with_capacity((cols * 20 + 5) as usize * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let Rgba { r, g, b, .. } = Self::block(fb, col, row, cols, rows);
                let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
            }
            output.push_str("\x1b[0m\n");
        }

        output
    }

    fn block(fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> Rgba {
        sample_block(
            fb,
            block_edge(col, cols, fb.width()),
            block_edge(row, rows, fb.height()),
            block_edge(col + 1, cols, fb.width()),
            block_edge(row + 1, rows, fb.height()),
        )
    }

    /// Target size in characters, preserving aspect ratio.
    /// `char_aspect` is the height/width ratio of a character cell.
    fn compute_dimensions(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;

        let w = self.width.unwrap_or_else(|| 80u32.min(fb.width()));
        let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
        (w, h.max(1))
    }

    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_render_white() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);

        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_single_pixel_line_survives_downsampling() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        for x in 0..100 {
            fb.set_pixel(x, 37, Rgba::BLACK);
        }

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(10).render(&fb);
        let dark_rows = output.lines().filter(|line| line.chars().all(|c| c == ' ')).count();
        assert_eq!(dark_rows, 1);
    }

    #[test]
    fn test_unicode_half_block_contains_ansi() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let output = TerminalEncoder::new().mode(TerminalMode::UnicodeHalfBlock).width(5).render(&fb);

        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_ansi_true_color_contains_escapes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLUE);

        let output = TerminalEncoder::new().mode(TerminalMode::AnsiTrueColor).width(5).render(&fb);

        assert!(output.contains("48;2;0;0;255"));
    }

    #[test]
    fn test_height_follows_aspect_ratio() {
        let fb = Framebuffer::new(100, 100).unwrap();

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(20).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].len(), 20);
    }

    #[test]
    fn test_half_block_cells_split_rows() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(0, 2, 4, 2, Rgba::BLUE);

        let cells = half_block_cells(&fb, 2, 1);
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.top == Rgba::WHITE && c.bottom == Rgba::BLUE));
    }

    #[test]
    fn test_sample_block_handles_oversized_grid() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.clear(Rgba::RED);
        // more cells than pixels: blocks collapse onto existing pixels
        let cells = half_block_cells(&fb, 8, 8);
        assert_eq!(cells.len(), 64);
        assert!(cells.iter().all(|c| c.top == Rgba::RED && c.bottom == Rgba::RED));
    }
}
