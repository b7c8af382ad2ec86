//! Scale functions for data-to-device mappings.
//!
//! A [`LinearScale`] is only defined for a non-empty domain. [`AxisScale`]
//! wraps it with the collapsed-domain fallback the viewport relies on: when
//! every sample shares one value, that value maps to the middle of the range.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
///
/// The domain is stored as half extents so that a span wider than
/// `f64::MAX` (say `-1e308..1e308`) still maps without overflowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    half_min: f64,
    half_span: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// The range may be reversed (`range.0 > range.1`), which is how device
    /// y axes are flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty or either extent is not finite.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        let finite = [domain.0, domain.1, range.0, range.1].iter().all(|v| v.is_finite());
        if !finite {
            return Err(Error::ScaleDomain("Domain and range must be finite".to_string()));
        }

        // Halving is exact for normal values; subnormal extents may round together.
        let half_min = domain.0 / 2.0;
        let half_span = domain.1 / 2.0 - half_min;
        if half_span == 0.0 {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self { half_min, half_span, range_min: range.0, range_max: range.1 })
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value / 2.0 - self.half_min) / self.half_span;
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.half_min * 2.0, (self.half_min + self.half_span) * 2.0)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// One axis of a viewport: linear where the data spans an interval,
/// pinned to the range midpoint where it collapses to a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Regular affine mapping.
    Linear(LinearScale),
    /// All data shares `value`; everything maps to the middle of `range`.
    Collapsed {
        /// The single domain value.
        value: f64,
        /// Device extent of the axis.
        range: (f64, f64),
    },
}

impl AxisScale {
    /// Build the scale for `domain`, falling back to [`AxisScale::Collapsed`]
    /// when `domain.0 == domain.1` (or the domain is not finite).
    #[must_use]
    pub fn fit(domain: (f64, f64), range: (f64, f64)) -> Self {
        match LinearScale::new(domain, range) {
            Ok(linear) => Self::Linear(linear),
            Err(_) => Self::Collapsed { value: domain.0, range },
        }
    }

    /// Whether the collapsed fallback is in effect.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed { .. })
    }
}

impl Scale<f64, f64> for AxisScale {
    fn scale(&self, value: f64) -> f64 {
        match self {
            Self::Linear(linear) => linear.scale(value),
            Self::Collapsed { range, .. } => (range.0 + range.1) / 2.0,
        }
    }

    fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(linear) => linear.domain(),
            Self::Collapsed { value, .. } => (*value, *value),
        }
    }

    fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(linear) => linear.range(),
            Self::Collapsed { range, .. } => *range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 0.0).abs() < 1e-12);
        assert!((scale.scale(50.0) - 0.5).abs() < 1e-12);
        assert!((scale.scale(100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_scale_reversed_range() {
        let scale = LinearScale::new((0.0, 10.0), (580.0, 70.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 580.0).abs() < 1e-9);
        assert!((scale.scale(10.0) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_scale_spans_whole_f64_range() {
        let scale = LinearScale::new((-1e308, 1e308), (70.0, 830.0)).expect("operation should succeed");
        assert!((scale.scale(-1e308) - 70.0).abs() < 1e-9);
        assert!((scale.scale(0.0) - 450.0).abs() < 1e-9);
        assert!((scale.scale(1e308) - 830.0).abs() < 1e-9);
    }

    #[test]
    fn test_subnormal_domain_that_rounds_to_empty_is_rejected() {
        assert!(LinearScale::new((0.0, f64::from_bits(1)), (0.0, 1.0)).is_err());
        assert!(AxisScale::fit((0.0, f64::from_bits(1)), (0.0, 10.0)).is_collapsed());
    }

    #[test]
    fn test_linear_scale_rejects_empty_domain() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((f64::NAN, 5.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_axis_scale_collapsed_maps_to_midpoint() {
        let axis = AxisScale::fit((3.0, 3.0), (70.0, 830.0));
        assert!(axis.is_collapsed());
        assert!((axis.scale(3.0) - 450.0).abs() < 1e-9);
        assert!((axis.scale(-1e9) - 450.0).abs() < 1e-9);
        assert_eq!(axis.domain(), (3.0, 3.0));
    }

    #[test]
    fn test_axis_scale_linear_passthrough() {
        let axis = AxisScale::fit((0.0, 1.0), (0.0, 10.0));
        assert!(!axis.is_collapsed());
        assert!((axis.scale(0.25) - 2.5).abs() < 1e-12);
        assert_eq!(axis.range(), (0.0, 10.0));
    }
}
