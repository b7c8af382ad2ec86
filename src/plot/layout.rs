//! Fixed placement of every element in a frame.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Default frame width.
pub const DEFAULT_WIDTH: u32 = 900;
/// Default frame height.
pub const DEFAULT_HEIGHT: u32 = 650;
/// Default distance from each frame edge to the plotting area.
pub const DEFAULT_MARGIN: u32 = 70;

/// Top of the title.
pub(crate) const TITLE_Y: i32 = 20;
/// Grid divisions per axis.
pub(crate) const GRID_DIVISIONS: u32 = 10;
/// Side of a data-point square.
pub(crate) const POINT_SIZE: u32 = 8;

/// Top-left corner of the legend block.
pub(crate) const LEGEND_ORIGIN: (i32, i32) = (90, 80);
/// Side of the legend's data swatch and length of its line sample.
pub(crate) const LEGEND_SWATCH: u32 = 20;
/// Gap from the legend's left edge to its captions.
pub(crate) const LEGEND_CAPTION_OFFSET: i32 = 30;
/// Vertical distance between the two legend rows.
pub(crate) const LEGEND_ROW_GAP: i32 = 30;
/// Vertical distance from the legend's top to its line sample.
pub(crate) const LEGEND_LINE_DROP: i32 = 40;
/// Vertical distance from the legend's top to the equation text.
pub(crate) const EQUATION_OFFSET: i32 = 60;

/// Frame size and labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLayout {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Gap between the frame edge and the plotting area on every side.
    pub margin: u32,
    /// Centred above the plot.
    pub title: String,
    /// Centred below the plot.
    pub x_label: String,
    /// Stacked down the left edge.
    pub y_label: String,
    /// Key help along the bottom edge.
    pub instructions: String,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            title: "Temperature Prediction using Linear Regression".to_string(),
            x_label: "Time of Day".to_string(),
            y_label: "Temperature".to_string(),
            instructions: "Esc: quit   N: new data   R: retrain   S: save PNG".to_string(),
        }
    }
}

impl PlotLayout {
    /// Whether the margins leave a non-empty plotting area.
    #[must_use]
    pub fn has_plot_area(&self) -> bool {
        let double = u64::from(self.margin) * 2;
        u64::from(self.width) > double && u64::from(self.height) > double
    }

    /// The rectangle data is mapped into. Empty if the margins swallow the frame.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        let margin = f64::from(self.margin);
        let width = (f64::from(self.width) - 2.0 * margin).max(0.0);
        let height = (f64::from(self.height) - 2.0 * margin).max(0.0);
        Rect::new(margin, margin, width, height)
    }

    /// Top of the x-axis label.
    #[must_use]
    pub fn x_label_y(&self) -> i32 {
        self.height as i32 - 40
    }

    /// Column and first row of the stacked y-axis label.
    #[must_use]
    pub fn y_label_origin(&self) -> (i32, i32) {
        (20, self.height as i32 / 2 - 35)
    }

    /// Top of the key help line.
    #[must_use]
    pub fn instructions_y(&self) -> i32 {
        self.height as i32 - 30
    }
}
