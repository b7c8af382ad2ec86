//! Bitmap text: a fixed 5x7 glyph table and a rasterizer over it.

pub mod glyph;
mod raster;

pub use glyph::{classify, glyph_for, GlyphIndex, GLYPHS};
pub use raster::{
    centered_x, draw_cells, rasterize, rasterize_stacked, text_width, GlyphCell,
    TextRun, PITCH, STACK_PITCH,
};
