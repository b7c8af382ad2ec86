//! The 5x7 glyph table.
//!
//! Each entry is seven rows, top to bottom. Within a row only the low five
//! bits are used and bit 4 is the leftmost pixel.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 7;
/// Number of table entries.
pub const GLYPH_COUNT: usize = 44;

/// One glyph bitmap.
pub type Glyph = [u8; GLYPH_HEIGHT];

/// Position of a glyph in [`GLYPHS`]. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphIndex(u8);

impl GlyphIndex {
    /// Entry drawn for spaces and for every unsupported character.
    pub const BLANK: Self = Self(36);

    /// Raw table position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// The bitmap at this position.
    #[must_use]
    pub fn glyph(self) -> &'static Glyph {
        &GLYPHS[self.get()]
    }
}

/// Map a character to its glyph. Letters are case-folded; anything
/// outside the table renders as a space.
#[must_use]
pub fn classify(c: char) -> GlyphIndex {
    let index = match c {
        '0'..='9' => c as u8 - b'0',
        'A'..='Z' => c as u8 - b'A' + 10,
        'a'..='z' => c as u8 - b'a' + 10,
        '-' => 37,
        '.' => 38,
        ':' => 39,
        ',' => 40,
        '+' => 41,
        '=' => 42,
        _ => return GlyphIndex::BLANK,
    };
    GlyphIndex(index)
}

/// Bitmap for `c`.
#[must_use]
pub fn glyph_for(c: char) -> &'static Glyph {
    classify(c).glyph()
}

/// Whether the pixel at (`col`, `row`) of `glyph` is lit.
#[must_use]
pub fn is_set(glyph: &Glyph, col: usize, row: usize) -> bool {
    col < GLYPH_WIDTH && row < GLYPH_HEIGHT && glyph[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}

/// Glyph bitmaps, addressed through [`GlyphIndex`].
#[rustfmt::skip]
pub static GLYPHS: [Glyph; GLYPH_COUNT] = [
    // 0-9
    [0x1E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x1E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x1E, 0x01, 0x01, 0x1E, 0x10, 0x10, 0x1F],
    [0x1E, 0x01, 0x01, 0x0E, 0x01, 0x01, 0x1E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x01, 0x1E],
    [0x0E, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x0E],
    // A-Z
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x12, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
    // space - . : , + =
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00],
    [0x00, 0x04, 0x0A, 0x11, 0x0A, 0x04, 0x00],
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00],
    // unused
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];
