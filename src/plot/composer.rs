//! Drawing one complete frame.

use super::clip::clip_line_to_y_range;
use super::layout::{
    PlotLayout, EQUATION_OFFSET, GRID_DIVISIONS, LEGEND_CAPTION_OFFSET, LEGEND_LINE_DROP,
    LEGEND_ORIGIN, LEGEND_ROW_GAP, LEGEND_SWATCH, POINT_SIZE, TITLE_Y,
};
use crate::color::palette;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use crate::render::{draw_line, draw_line_in, draw_rect, Drawable};
use crate::report::format_equation;
use crate::text::{centered_x, TextRun};
use crate::trainer::Model;
use crate::viewport::Viewport;
use log::{debug, warn};

/// Renders a dataset and its fitted line into a framebuffer.
#[derive(Debug, Clone, Default)]
pub struct PlotComposer {
    layout: PlotLayout,
}

impl PlotComposer {
    /// Create a composer for `layout`.
    #[must_use]
    pub fn new(layout: PlotLayout) -> Self {
        Self { layout }
    }

    /// The layout in use.
    #[must_use]
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Render into a fresh framebuffer sized by the layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if the layout has a zero width or height.
    pub fn compose(&self, dataset: &Dataset, model: &Model) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.layout.width, self.layout.height)?;
        self.render(&mut fb, dataset, model);
        Ok(fb)
    }

    /// Render into an existing framebuffer. Everything outside it is dropped.
    pub fn render(&self, fb: &mut Framebuffer, dataset: &Dataset, model: &Model) {
        let viewport = Viewport::fit(dataset, self.layout.plot_area());
        debug!("composing frame for {} samples", dataset.len());

        fb.clear(palette::BACKGROUND);
        self.draw_grid(fb);
        self.draw_axes(fb);
        self.draw_labels(fb);
        draw_points(fb, dataset, &viewport);
        draw_regression(fb, model, &viewport);
        draw_legend(fb, model);
        self.centered(&self.layout.instructions, self.layout.instructions_y()).draw(fb, palette::INK);
    }

    fn centered(&self, text: &str, y: i32) -> TextRun {
        TextRun::new(centered_x(text, self.layout.width), y, text)
    }

    fn draw_grid(&self, fb: &mut Framebuffer) {
        let area = self.layout.plot_area();
        let (left, top) = (area.left() as i32, area.top() as i32);
        let (right, bottom) = (area.right() as i32, area.bottom() as i32);
        let (w, h) = (area.width as i32, area.height as i32);
        let n = GRID_DIVISIONS as i32;

        for i in 1..=n {
            let gx = left + i * w / n;
            draw_line(fb, gx, top, gx, bottom, palette::GRID);
            let gy = bottom - i * h / n;
            draw_line(fb, left, gy, right, gy, palette::GRID);
        }
    }

    fn draw_axes(&self, fb: &mut Framebuffer) {
        let area = self.layout.plot_area();
        let origin = Point::new(area.left(), area.bottom());
        Line::new(origin, Point::new(area.right(), area.bottom())).draw(fb, palette::INK);
        Line::new(Point::new(area.left(), area.top()), origin).draw(fb, palette::INK);
    }

    fn draw_labels(&self, fb: &mut Framebuffer) {
        let layout = &self.layout;
        self.centered(&layout.title, TITLE_Y).draw(fb, palette::INK);
        self.centered(&layout.x_label, layout.x_label_y()).draw(fb, palette::INK);
        let (x, y) = layout.y_label_origin();
        TextRun::stacked(x, y, layout.y_label.as_str()).draw(fb, palette::INK);
    }
}

fn draw_points(fb: &mut Framebuffer, dataset: &Dataset, viewport: &Viewport) {
    let half = (POINT_SIZE / 2) as i32;
    for s in dataset {
        let p = viewport.map_point(Point::new(s.x, s.y));
        draw_rect(fb, p.x as i32 - half, p.y as i32 - half, POINT_SIZE, POINT_SIZE, palette::DATA);
    }
}

fn draw_regression(fb: &mut Framebuffer, model: &Model, viewport: &Viewport) {
    let (lo, hi) = (viewport.data_min(), viewport.data_max());
    let Some(segment) = clip_line_to_y_range(model, lo.x, hi.x, lo.y, hi.y) else {
        debug!("regression line does not cross the data's y-range; not drawn");
        return;
    };
    if !segment.is_finite() {
        warn!("model is not finite ({model:?}); regression line skipped");
        return;
    }

    let start = viewport.map_point(segment.start);
    let end = viewport.map_point(segment.end);
    draw_line_in(
        fb,
        viewport.device(),
        start.x as i32,
        start.y as i32,
        end.x as i32,
        end.y as i32,
        palette::FIT,
    );
}

fn draw_legend(fb: &mut Framebuffer, model: &Model) {
    let (x, y) = LEGEND_ORIGIN;
    let swatch = LEGEND_SWATCH as i32;

    draw_rect(fb, x, y, LEGEND_SWATCH, LEGEND_SWATCH, palette::DATA);
    TextRun::new(x + LEGEND_CAPTION_OFFSET, y, "Data Points").draw(fb, palette::INK);

    let line_y = y + LEGEND_LINE_DROP;
    draw_line(fb, x, line_y, x + swatch, line_y, palette::FIT);
    TextRun::new(x + LEGEND_CAPTION_OFFSET, y + LEGEND_ROW_GAP, "Regression Line")
        .draw(fb, palette::INK);

    TextRun::new(x, y + EQUATION_OFFSET, format_equation(model)).draw(fb, palette::INK);
}
