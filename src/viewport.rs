//! Mapping from data space to device space.
//!
//! The device rectangle uses screen orientation: x grows right, y grows
//! down. Data y grows up, so the y axis is flipped. An axis whose data all
//! share a single value maps that value to the middle of its device span
//! instead of dividing by zero.

use crate::dataset::Dataset;
use crate::geometry::{Point, Rect};
use crate::scale::{AxisScale, Scale};
use log::warn;

/// Affine map from a dataset's bounding box onto a device rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    data_min: Point,
    data_max: Point,
    device: Rect,
    x: AxisScale,
    y: AxisScale,
}

impl Viewport {
    /// Fit a viewport to the bounding box of `dataset`.
    #[must_use]
    pub fn fit(dataset: &Dataset, device: Rect) -> Self {
        let bounds = dataset.bounds();
        Self::from_bounds(bounds.min, bounds.max, device)
    }

    /// Build a viewport from explicit data extents.
    #[must_use]
    pub fn from_bounds(data_min: Point, data_max: Point, device: Rect) -> Self {
        let x = AxisScale::fit((data_min.x, data_max.x), (device.left(), device.right()));
        let y = AxisScale::fit((data_min.y, data_max.y), (device.bottom(), device.top()));

        if x.is_collapsed() {
            warn!("all samples share x = {}; centring horizontally", data_min.x);
        }
        if y.is_collapsed() {
            warn!("all samples share y = {}; centring vertically", data_min.y);
        }

        Self { data_min, data_max, device, x, y }
    }

    /// Smallest x and y of the data.
    #[must_use]
    pub fn data_min(&self) -> Point {
        self.data_min
    }

    /// Largest x and y of the data.
    #[must_use]
    pub fn data_max(&self) -> Point {
        self.data_max
    }

    /// Target rectangle.
    #[must_use]
    pub fn device(&self) -> Rect {
        self.device
    }

    /// Map a data-space point to device space.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(self.x.scale(p.x), self.y.scale(p.y))
    }
}
