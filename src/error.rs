//! Error types for regline operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, training, rendering or presenting.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scale domain error (e.g., empty or non-finite extent).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// A dataset with no samples; training would divide by zero.
    #[error("insufficient data: at least one sample is required")]
    InsufficientData,

    /// More samples than the dataset capacity allows under the `reject` policy.
    #[error("dataset capacity exceeded: read {count} samples, capacity {capacity}")]
    CapacityExceeded {
        /// Samples read when loading stopped; the source may hold more.
        count: usize,
        /// Configured capacity.
        capacity: usize,
    },

    /// The sample file could not be opened or read.
    #[error("cannot read data file {}: {source}", path.display())]
    DataFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Terminal initialization or drawing error.
    #[error("terminal error: {0}")]
    Terminal(String),
}
