//! Plot composition: line clipping, frame layout and the frame renderer.

mod clip;
mod composer;
mod layout;

pub use clip::{clip_line_to_y_range, ClippedSegment};
pub use composer::PlotComposer;
pub use layout::{PlotLayout, DEFAULT_HEIGHT, DEFAULT_MARGIN, DEFAULT_WIDTH};
