//! Property-based tests for clipping, viewport mapping and text.
//!
//! Run: cargo test --test properties_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use regline::prelude::*;
use regline::text::{glyph_for, GLYPHS, PITCH};

fn slope() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0f64..-0.01, 0.01f64..100.0]
}

fn any_normal() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE | prop::num::f64::NORMAL
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Clipped endpoints stay inside the visible box for any non-zero slope,
    /// and a segment is only dropped when the line never enters the y-range.
    #[test]
    fn prop_clipped_segment_stays_in_bounds(
        m in slope(),
        b in -100.0f64..100.0,
        min_x in -100.0f64..0.0,
        width in 0.1f64..200.0,
        y_min in -100.0f64..100.0,
        height in 0.1f64..200.0,
    ) {
        let max_x = min_x + width;
        let y_max = y_min + height;
        let model = Model::new(m, b);
        let (y_start, y_end) = (model.predict(min_x), model.predict(max_x));
        let misses = (y_start < y_min && y_end < y_min) || (y_start > y_max && y_end > y_max);

        match clip_line_to_y_range(&model, min_x, max_x, y_min, y_max) {
            None => prop_assert!(misses, "a line crossing the range lost its segment"),
            Some(seg) => {
                prop_assert!(!misses);
                for p in [seg.start, seg.end] {
                    prop_assert!(p.is_finite());
                    prop_assert!((min_x..=max_x).contains(&p.x), "x {} outside [{min_x}, {max_x}]", p.x);
                    prop_assert!((y_min..=y_max).contains(&p.y), "y {} outside [{y_min}, {y_max}]", p.y);
                }
            }
        }
    }

    /// A flat line keeps both x extremes.
    #[test]
    fn prop_zero_slope_keeps_x(
        b in -1000.0f64..1000.0,
        min_x in -100.0f64..0.0,
        max_x in 0.0f64..100.0,
        y_min in -10.0f64..0.0,
        y_max in 0.0f64..10.0,
    ) {
        let seg = clip_line_to_y_range(&Model::new(0.0, b), min_x, max_x, y_min, y_max).unwrap();
        prop_assert_eq!(seg.start.x, min_x);
        prop_assert_eq!(seg.end.x, max_x);
        prop_assert_eq!(seg.start.y, b.clamp(y_min, y_max));
    }

    /// Every mapped sample is finite and lands inside the device rectangle.
    #[test]
    fn prop_viewport_maps_into_device(
        pairs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 1..50),
    ) {
        let data = Dataset::from_pairs(&pairs).unwrap();
        let device = Rect::new(70.0, 70.0, 760.0, 510.0);
        let viewport = Viewport::fit(&data, device);

        for s in &data {
            let p = viewport.map_point(Point::new(s.x, s.y));
            prop_assert!(p.is_finite());
            prop_assert!(p.x >= device.left() - 1e-6 && p.x <= device.right() + 1e-6);
            prop_assert!(p.y >= device.top() - 1e-6 && p.y <= device.bottom() + 1e-6);
        }
    }

    /// Same, across the whole range of normal floats, where spans overflow f64.
    #[test]
    fn prop_viewport_handles_extreme_magnitudes(
        pairs in prop::collection::vec((any_normal(), any_normal()), 1..20),
    ) {
        let data = Dataset::from_pairs(&pairs).unwrap();
        let device = Rect::new(70.0, 70.0, 760.0, 510.0);
        let viewport = Viewport::fit(&data, device);

        for s in &data {
            let p = viewport.map_point(Point::new(s.x, s.y));
            prop_assert!(p.is_finite(), "({}, {}) mapped to {p:?}", s.x, s.y);
            prop_assert!(p.x >= device.left() - 1e-6 && p.x <= device.right() + 1e-6);
            prop_assert!(p.y >= device.top() - 1e-6 && p.y <= device.bottom() + 1e-6);
        }
    }

    /// Every character classifies into the table; letters ignore case.
    #[test]
    fn prop_classify_is_total(c in any::<char>()) {
        prop_assert!(classify(c).get() < GLYPHS.len());
        prop_assert_eq!(classify(c), classify(c.to_ascii_uppercase()));
    }

    /// Rasterizing lights exactly the set bits, each inside its glyph box.
    #[test]
    fn prop_rasterize_matches_bitmaps(
        text in "[ -~]{0,24}",
        x in -1000i32..1000,
        y in -1000i32..1000,
    ) {
        let cells = rasterize(&text, x, y);
        let expected: u32 = text.chars().flat_map(|c| glyph_for(c).iter()).map(|row| row.count_ones()).sum();
        prop_assert_eq!(cells.len(), expected as usize);

        for cell in &cells {
            prop_assert!((y..y + 7).contains(&cell.y));
            prop_assert!((cell.x - x).rem_euclid(PITCH) < 5);
        }
    }

    /// Prediction is a pure affine function.
    #[test]
    fn prop_predict_is_affine(m in -1e3f64..1e3, b in -1e3f64..1e3, x in -1e3f64..1e3) {
        let model = Model::new(m, b);
        prop_assert_eq!(predict(&model, x).to_bits(), predict(&model, x).to_bits());
        prop_assert_eq!(predict(&model, x), m * x + b);
    }

    /// Composing the same inputs twice gives identical pixels.
    #[test]
    fn prop_composition_is_deterministic(
        pairs in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..20),
        m in -5.0f64..5.0,
        b in -5.0f64..5.0,
    ) {
        let data = Dataset::from_pairs(&pairs).unwrap();
        let layout = PlotLayout { width: 160, height: 120, margin: 20, ..PlotLayout::default() };
        let composer = PlotComposer::new(layout);
        let model = Model::new(m, b);

        let a = composer.compose(&data, &model).unwrap();
        let c = composer.compose(&data, &model).unwrap();
        prop_assert_eq!(a.to_compact_pixels(), c.to_compact_pixels());
    }
}
