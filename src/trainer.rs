//! Batch gradient descent for a single-feature linear model.
//!
//! Training is a fixed-length loop: every epoch computes the mean-squared-error
//! gradient over the whole dataset and steps both parameters against it. There
//! is no early stopping, so the epoch count alone ends a run, and the same
//! dataset and configuration always produce a bit-identical [`Model`].

use crate::dataset::Dataset;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Default number of epochs per run.
pub const DEFAULT_EPOCHS: usize = 10_000;
/// Default step size.
pub const DEFAULT_LEARNING_RATE: f64 = 0.0001;
/// Default monitoring interval in epochs.
pub const DEFAULT_REPORT_EVERY: usize = 1000;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Model {
    /// Gradient of the line.
    pub slope: f64,
    /// Value at `x = 0`.
    pub intercept: f64,
}

impl Model {
    /// Create a model from its parameters.
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Both parameters are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Evaluate `model` at `x`.
#[must_use]
pub fn predict(model: &Model, x: f64) -> f64 {
    model.predict(x)
}

/// Mean of squared residuals of `model` over `dataset`.
#[must_use]
pub fn compute_mse(dataset: &Dataset, model: &Model) -> f64 {
    let sum: f64 = dataset
        .iter()
        .map(|s| {
            let residual = model.predict(s.x) - s.y;
            residual * residual
        })
        .sum();
    sum / dataset.len() as f64
}

/// Hyperparameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of full passes over the dataset.
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    /// Step size applied to both gradients.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Report the MSE after every epoch whose index is a multiple of this.
    #[serde(default = "default_report_every")]
    pub report_every: usize,
}

fn default_epochs() -> usize {
    DEFAULT_EPOCHS
}
fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}
fn default_report_every() -> usize {
    DEFAULT_REPORT_EVERY
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            report_every: default_report_every(),
        }
    }
}

/// Monitoring sample taken during training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// Zero-based epoch index; the report reflects the parameters after this epoch's update.
    pub epoch: usize,
    /// Mean squared error of the model at that point.
    pub mse: f64,
}

/// Runs gradient descent with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// Create a trainer.
    #[must_use]
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Fit a model, logging progress at `debug` level.
    #[must_use]
    pub fn train(&self, dataset: &Dataset) -> Model {
        self.train_with(dataset, |report| {
            debug!("epoch {}: mse = {:.6}", report.epoch, report.mse);
        })
    }

    /// Fit a model, handing every monitoring sample to `on_report`.
    ///
    /// The callback only observes; the returned model is the same whether or
    /// not it does anything.
    pub fn train_with<F>(&self, dataset: &Dataset, mut on_report: F) -> Model
    where
        F: FnMut(&EpochReport),
    {
        let TrainerConfig { epochs, learning_rate, report_every } = self.config;
        let scale = 2.0 / dataset.len() as f64;
        let mut model = Model::default();

        info!(
            "training on {} samples: {epochs} epochs, learning rate {learning_rate}",
            dataset.len()
        );

        for epoch in 0..epochs {
            let (slope_sum, intercept_sum) =
                dataset.iter().fold((0.0, 0.0), |(gm, gb), s| {
                    let error = model.slope * s.x + model.intercept - s.y;
                    (gm + error * s.x, gb + error)
                });

            model.slope -= learning_rate * (scale * slope_sum);
            model.intercept -= learning_rate * (scale * intercept_sum);

            if report_every > 0 && epoch % report_every == 0 {
                on_report(&EpochReport { epoch, mse: compute_mse(dataset, &model) });
            }
        }

        info!("trained model: slope {:.6}, intercept {:.6}", model.slope, model.intercept);
        model
    }
}
