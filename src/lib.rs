//! # regline
//!
//! Fit a straight line to `(x, y)` samples with batch gradient descent, then
//! render the fit as a deterministic 2-D plot with a built-in 5x7 bitmap font.
//!
//! ## Pipeline
//!
//! ```text
//! Dataset -> Trainer -> Model -> Viewport -> PlotComposer -> Framebuffer -> PNG / terminal
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regline::prelude::*;
//!
//! let data = Dataset::from_pairs(&[(1.0, 5.0), (2.0, 7.0), (3.0, 9.0)])?;
//! let model = Trainer::default().train(&data);
//!
//! let frame = PlotComposer::default().compose(&data, &model)?;
//! PngEncoder::write_to_file(&frame, "fit.png")?;
//! # Ok::<(), regline::Error>(())
//! ```
//!
//! Rendering is total and reproducible: the same dataset and model always
//! produce the same pixels, degenerate data ranges are centred instead of
//! divided by, and the regression line is clipped to the data's y-range.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA colour and the plot palette.
pub mod color;

/// Padded RGBA pixel buffer.
pub mod framebuffer;

/// Points, segments and rectangles.
pub mod geometry;

/// Scale functions for data-to-device mappings.
pub mod scale;

// ============================================================================
// Model Modules
// ============================================================================

/// Samples and CSV ingestion.
pub mod dataset;

/// Gradient descent training.
pub mod trainer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of lines and rectangles.
pub mod render;

/// 5x7 bitmap text.
pub mod text;

/// Data-to-device viewport.
pub mod viewport;

/// Frame composition and line clipping.
pub mod plot;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Application Modules
// ============================================================================

/// Console reports.
pub mod report;

/// YAML configuration.
pub mod config;

/// Interactive terminal surface.
pub mod app;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for regline operations.
pub mod error;

pub use config::Config;
pub use dataset::{Dataset, Sample};
pub use error::{Error, Result};
pub use trainer::{Model, Trainer, TrainerConfig};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use regline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::dataset::{CapacityPolicy, DataLoader, Dataset, Sample};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::plot::{clip_line_to_y_range, ClippedSegment, PlotComposer, PlotLayout};
    pub use crate::render::Drawable;
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::text::{classify, rasterize, GlyphCell};
    pub use crate::trainer::{compute_mse, predict, EpochReport, Model, Trainer, TrainerConfig};
    pub use crate::viewport::Viewport;
}
