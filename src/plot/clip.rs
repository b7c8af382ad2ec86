//! Restricting the regression line to the visible y-range.

use crate::geometry::Point;
use crate::trainer::Model;

/// The part of the regression line that is drawn, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedSegment {
    /// Endpoint derived from the left x extreme.
    pub start: Point,
    /// Endpoint derived from the right x extreme.
    pub end: Point,
}

impl ClippedSegment {
    /// Both endpoints are finite. A diverged model yields a segment that is not.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Evaluate `model` at `min_x` and `max_x` and pull any endpoint whose y
/// leaves `[y_min, y_max]` back onto the violated bound.
///
/// A pulled endpoint moves along the line to where it crosses the bound. A
/// flat line has no such crossing, so its x stays put and only y is clamped.
/// Either way x ends up inside `[min_x, max_x]`.
///
/// Returns `None` when a sloped line stays above or below the range across
/// the whole x interval: there is no crossing to move to.
#[must_use]
pub fn clip_line_to_y_range(
    model: &Model,
    min_x: f64,
    max_x: f64,
    y_min: f64,
    y_max: f64,
) -> Option<ClippedSegment> {
    let (y_start, y_end) = (model.predict(min_x), model.predict(max_x));
    let below = y_start < y_min && y_end < y_min;
    let above = y_start > y_max && y_end > y_max;
    if model.slope != 0.0 && (below || above) {
        return None;
    }

    let clip = |x: f64, y: f64| -> Point {
        let bound = if y < y_min {
            y_min
        } else if y > y_max {
            y_max
        } else {
            return Point::new(x, y);
        };

        let crossing = if model.slope == 0.0 { x } else { (bound - model.intercept) / model.slope };
        Point::new(crossing.max(min_x).min(max_x), bound)
    };

    Some(ClippedSegment { start: clip(min_x, y_start), end: clip(max_x, y_end) })
}
