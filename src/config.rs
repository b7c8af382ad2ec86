//! YAML configuration.
//!
//! Precedence is CLI > file > defaults. Every section and field is
//! optional; missing values take their defaults.
//!
//! ```yaml
//! training:
//!   epochs: 10000
//!   learning_rate: 0.0001
//! data:
//!   capacity: 1000
//!   overflow: truncate   # or reject
//! plot:
//!   title: Temperature Prediction using Linear Regression
//! ui:
//!   poll_ms: 10
//!   snapshot_path: regline.png
//! ```

use crate::dataset::{CapacityPolicy, DataLoader, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::plot::PlotLayout;
use crate::trainer::TrainerConfig;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Dataset ingestion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Maximum number of samples kept per dataset.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// What happens when a file holds more than `capacity` samples.
    #[serde(default)]
    pub overflow: CapacityPolicy,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { capacity: default_capacity(), overflow: CapacityPolicy::default() }
    }
}

impl DataConfig {
    /// A loader honouring these settings.
    #[must_use]
    pub fn loader(&self) -> DataLoader {
        DataLoader::new(self.capacity, self.overflow)
    }
}

/// Interactive surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll timeout per loop iteration, in milliseconds.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    /// Where the `s` key writes the current frame.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

fn default_poll_ms() -> u64 {
    10
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("regline.png")
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { poll_ms: default_poll_ms(), snapshot_path: default_snapshot_path() }
    }
}

impl UiConfig {
    /// Poll timeout as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gradient descent hyperparameters.
    #[serde(default)]
    pub training: TrainerConfig,

    /// Dataset ingestion.
    #[serde(default)]
    pub data: DataConfig,

    /// Frame size and labels.
    #[serde(default)]
    pub plot: PlotLayout,

    /// Interactive surface.
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Default configuration file location: `<config dir>/regline/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("regline").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no configuration at {}", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("ignoring configuration {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicitly requested file must load; the default location is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` cannot be read or parsed, or if the
    /// result fails [`Config::validate`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => Self::default_path().map(Self::load_or_default).unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no run can use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.training.epochs == 0 {
            return Err(invalid("training.epochs", "must be at least 1"));
        }
        let lr = self.training.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(invalid("training.learning_rate", format!("must be a positive number, got {lr}")));
        }
        if self.data.capacity == 0 {
            return Err(invalid("data.capacity", "must be at least 1"));
        }
        if !self.plot.has_plot_area() {
            return Err(invalid(
                "plot.margin",
                format!(
                    "margin {} leaves no plotting area in a {}x{} frame",
                    self.plot.margin, self.plot.width, self.plot.height
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: impl Into<String>) -> Error {
    Error::ConfigInvalid { key: key.to_string(), message: message.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.training.epochs, 10_000);
        assert_eq!(config.training.report_every, 1000);
        assert_eq!(config.data.capacity, 1000);
        assert_eq!(config.data.overflow, CapacityPolicy::Truncate);
        assert_eq!(config.ui.poll_interval(), Duration::from_millis(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_empty() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r"
training:
  epochs: 500
  learning_rate: 0.01
data:
  capacity: 50
  overflow: reject
plot:
  width: 640
  height: 480
  margin: 40
  y_label: Sales
ui:
  poll_ms: 25
  snapshot_path: out/frame.png
";

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.training.epochs, 500);
        assert!((config.training.learning_rate - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.training.report_every, 1000);
        assert_eq!(config.data.overflow, CapacityPolicy::Reject);
        assert_eq!(config.data.loader().capacity(), 50);
        assert_eq!(config.plot.y_label, "Sales");
        assert_eq!(config.plot.x_label, "Time of Day");
        assert_eq!(config.ui.snapshot_path, PathBuf::from("out/frame.png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
training:
  epochs: 10
  learning_rate: fast
";

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line: 4, .. }), "{err}");
    }

    #[test]
    fn test_validate_rejects_zero_epochs() {
        let mut config = Config::default();
        config.training.epochs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("training.epochs"), "{err}");
    }

    #[test]
    fn test_validate_rejects_bad_learning_rate() {
        for lr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut config = Config::default();
            config.training.learning_rate = lr;
            assert!(config.validate().is_err(), "learning rate {lr} accepted");
        }
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = Config::default();
        config.data.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_swallowed_plot() {
        let mut config = Config::default();
        config.plot.margin = 400;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref key, .. } if key == "plot.margin"));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path/config.yaml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_requires_explicit_file() {
        assert!(Config::resolve(Some(Path::new("/nonexistent/path/config.yaml"))).is_err());
    }
}
