//! Rasterization of geometric primitives into a [`Framebuffer`](crate::framebuffer::Framebuffer).
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer, non-antialiased line drawing
//! - **Cohen-Sutherland**: lines cut to the frame or plot area before stepping
//! - **Clipped fill**: axis-aligned rectangles clamped to the buffer
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{draw_line, draw_line_in, draw_rect, Drawable};
