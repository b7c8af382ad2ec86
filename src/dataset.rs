//! Sample storage and CSV ingestion.
//!
//! A [`Dataset`] always holds at least one sample, so everything downstream
//! (training, viewport fitting) can divide by its length. Datasets are
//! immutable; loading new data builds a new one.
//!
//! The input format is one `x,y` pair per line. Reading stops at the first
//! line that is not a pair of finite numbers; the samples before it are kept.

use crate::error::{Error, Result};
use crate::geometry::Point;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default maximum number of samples per dataset.
pub const DEFAULT_CAPACITY: usize = 1000;

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Independent variable.
    pub x: f64,
    /// Observed value.
    pub y: f64,
}

impl Sample {
    /// Create a sample.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What to do when a source holds more samples than the capacity allows.
///
/// Either way reading stops as soon as the outcome is known, so input past
/// the capacity is never parsed or buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Keep the first `capacity` samples and stop reading.
    #[default]
    Truncate,
    /// Fail with [`Error::CapacityExceeded`] when a further valid sample follows.
    Reject,
}

/// Per-axis extent of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x and smallest y.
    pub min: Point,
    /// Largest x and largest y.
    pub max: Point,
}

/// Ordered, non-empty collection of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Wrap a sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] if `samples` is empty.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InsufficientData);
        }
        Ok(Self { samples })
    }

    /// Build a dataset from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] if `pairs` is empty.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(x, y)| Sample::new(x, y)).collect())
    }

    /// Number of samples (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in load order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over samples in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Per-axis min and max, computed in a single pass.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let first = self.samples[0];
        let init = Bounds { min: Point::new(first.x, first.y), max: Point::new(first.x, first.y) };

        self.samples[1..].iter().fold(init, |acc, s| Bounds {
            min: Point::new(acc.min.x.min(s.x), acc.min.y.min(s.y)),
            max: Point::new(acc.max.x.max(s.x), acc.max.y.max(s.y)),
        })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Reads `x,y` files into datasets under a capacity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLoader {
    capacity: usize,
    policy: CapacityPolicy,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, CapacityPolicy::default())
    }
}

impl DataLoader {
    /// Create a loader. A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize, policy: CapacityPolicy) -> Self {
        Self { capacity: capacity.max(1), policy }
    }

    /// Maximum number of samples kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load a dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataFile`] if the file cannot be opened or read,
    /// [`Error::InsufficientData`] if no valid sample precedes the first
    /// malformed line, and [`Error::CapacityExceeded`] under
    /// [`CapacityPolicy::Reject`].
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| Error::DataFile { path: path.to_path_buf(), source })?;

        let dataset = self.load_reader(file).map_err(|err| match err {
            Error::Io(source) => Error::DataFile { path: path.to_path_buf(), source },
            other => other,
        })?;

        info!("loaded {} samples from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Load a dataset from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`DataLoader::load_path`], with read failures reported as [`Error::Io`].
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut samples = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) => match err.into_kind() {
                    csv::ErrorKind::Io(source) => return Err(Error::Io(source)),
                    kind => {
                        warn!("stopping at record {}: {kind:?}", index + 1);
                        break;
                    }
                },
            };

            let Some(sample) = parse_record(&record) else {
                warn!("stopping at record {}: not an x,y pair", index + 1);
                break;
            };

            // Only `Reject` reads past a full buffer, to see whether more follows.
            if samples.len() == self.capacity {
                return Err(Error::CapacityExceeded {
                    count: samples.len() + 1,
                    capacity: self.capacity,
                });
            }
            samples.push(sample);

            if samples.len() == self.capacity && self.policy == CapacityPolicy::Truncate {
                info!("capacity of {} samples reached; ignoring the rest of the input", self.capacity);
                break;
            }
        }

        debug!("parsed {} samples", samples.len());
        Dataset::new(samples)
    }
}

/// Parse a two-field record of finite numbers.
fn parse_record(record: &csv::StringRecord) -> Option<Sample> {
    if record.len() != 2 {
        return None;
    }
    let x: f64 = record.get(0)?.parse().ok()?;
    let y: f64 = record.get(1)?.parse().ok()?;
    (x.is_finite() && y.is_finite()).then_some(Sample::new(x, y))
}
