//! Frame encoders: PNG files and terminal text.

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{half_block_cells, sample_block, HalfBlockCell, TerminalEncoder, TerminalMode};
