//! Console text for training runs.
//!
//! These strings are product output, printed to stdout by the binary; they
//! are not log records.

use crate::dataset::Dataset;
use crate::trainer::{EpochReport, Model};
use std::fmt::Write as _;

/// One progress line, e.g. `Epoch 1000: MSE = 0.123456`.
#[must_use]
pub fn progress_line(report: &EpochReport) -> String {
    format!("Epoch {}: MSE = {:.6}", report.epoch, report.mse)
}

/// Final model line, e.g. `Trained model: y = 2.0000x + 3.0000`.
#[must_use]
pub fn model_summary(model: &Model) -> String {
    format!("Trained model: y = {:.4}x + {:.4}", model.slope, model.intercept)
}

/// One line per sample comparing observation and prediction.
#[must_use]
pub fn prediction_table(dataset: &Dataset, model: &Model) -> String {
    let mut out = String::new();
    for s in dataset {
        let _ = writeln!(
            out,
            "Time: {:.2}, Actual: {:.2}, Predicted: {:.2}",
            s.x,
            s.y,
            model.predict(s.x)
        );
    }
    out
}

/// Equation as drawn on the plot. A negative intercept is written with a
/// minus sign rather than `+ -`.
#[must_use]
pub fn format_equation(model: &Model) -> String {
    let sign = if model.intercept.is_sign_negative() && model.intercept != 0.0 { '-' } else { '+' };
    format!("y = {:.2}x {sign} {:.2}", model.slope, model.intercept.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line() {
        let line = progress_line(&EpochReport { epoch: 3000, mse: 0.5 });
        assert_eq!(line, "Epoch 3000: MSE = 0.500000");
    }

    #[test]
    fn test_model_summary() {
        assert_eq!(model_summary(&Model::new(2.0, 3.0)), "Trained model: y = 2.0000x + 3.0000");
    }

    #[test]
    fn test_prediction_table() {
        let data = Dataset::from_pairs(&[(1.0, 5.5), (2.0, 7.0)]).unwrap();
        let table = prediction_table(&data, &Model::new(2.0, 3.0));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["Time: 1.00, Actual: 5.50, Predicted: 5.00", "Time: 2.00, Actual: 7.00, Predicted: 7.00"]);
    }

    #[test]
    fn test_equation_signs() {
        assert_eq!(format_equation(&Model::new(2.0, 3.0)), "y = 2.00x + 3.00");
        assert_eq!(format_equation(&Model::new(-0.5, -1.25)), "y = -0.50x - 1.25");
        assert_eq!(format_equation(&Model::new(1.0, -0.0)), "y = 1.00x + 0.00");
    }
}
