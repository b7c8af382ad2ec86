//! Primitive rendering functions.
//!
//! Lines are clipped against a pixel box before they are stepped, so an
//! endpoint far outside the frame (a saturated `f64 as i32` cast, say) costs
//! nothing beyond the visible part.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Inclusive pixel bounds a line may touch.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl PixelBox {
    fn of(fb: &Framebuffer) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: f64::from(fb.width() - 1),
            bottom: f64::from(fb.height() - 1),
        }
    }

    /// `area` snapped inward to whole pixels and intersected with `fb`.
    fn within(fb: &Framebuffer, area: Rect) -> Option<Self> {
        let frame = Self::of(fb);
        let clipped = Self {
            left: area.left().ceil().max(frame.left),
            top: area.top().ceil().max(frame.top),
            right: area.right().floor().min(frame.right),
            bottom: area.bottom().floor().min(frame.bottom),
        };
        (clipped.left <= clipped.right && clipped.top <= clipped.bottom).then_some(clipped)
    }

    fn outcode(&self, x: f64, y: f64) -> u8 {
        let mut code = 0;
        if x < self.left {
            code |= LEFT;
        } else if x > self.right {
            code |= RIGHT;
        }
        if y < self.top {
            code |= ABOVE;
        } else if y > self.bottom {
            code |= BELOW;
        }
        code
    }

    /// Cohen-Sutherland: the part of the segment inside the box, rounded to pixels.
    fn clip(&self, from: (i32, i32), to: (i32, i32)) -> Option<((i32, i32), (i32, i32))> {
        let (mut ax, mut ay) = (f64::from(from.0), f64::from(from.1));
        let (mut bx, mut by) = (f64::from(to.0), f64::from(to.1));
        let mut code_a = self.outcode(ax, ay);
        let mut code_b = self.outcode(bx, by);

        loop {
            if code_a | code_b == 0 {
                let snap = |x: f64, y: f64| (x.round() as i32, y.round() as i32);
                return Some((snap(ax, ay), snap(bx, by)));
            }
            if code_a & code_b != 0 {
                return None;
            }

            // The outside endpoint has a flag its partner lacks, so the
            // divisor on that axis is non-zero.
            let code = if code_a == 0 { code_b } else { code_a };
            let (x, y) = if code & ABOVE != 0 {
                (ax + (bx - ax) * (self.top - ay) / (by - ay), self.top)
            } else if code & BELOW != 0 {
                (ax + (bx - ax) * (self.bottom - ay) / (by - ay), self.bottom)
            } else if code & RIGHT != 0 {
                (self.right, ay + (by - ay) * (self.right - ax) / (bx - ax))
            } else {
                (self.left, ay + (by - ay) * (self.left - ax) / (bx - ax))
            };

            if code == code_a {
                (ax, ay) = (x, y);
                code_a = self.outcode(ax, ay);
            } else {
                (bx, by) = (x, y);
                code_b = self.outcode(bx, by);
            }
        }
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const ABOVE: u8 = 4;
const BELOW: u8 = 8;

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Both endpoints are included. The part outside the framebuffer is cut off
/// before stepping.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    if let Some((from, to)) = PixelBox::of(fb).clip((x0, y0), (x1, y1)) {
        step_line(fb, from, to, color);
    }
}

/// Draw a line restricted to the pixels of `area`.
pub fn draw_line_in(
    fb: &mut Framebuffer,
    area: Rect,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgba,
) {
    let visible = PixelBox::within(fb, area).and_then(|b| b.clip((x0, y0), (x1, y1)));
    if let Some((from, to)) = visible {
        step_line(fb, from, to, color);
    }
}

/// Walk the major axis one pixel at a time, carrying the minor-axis error.
fn step_line(fb: &mut Framebuffer, from: (i32, i32), to: (i32, i32), color: Rgba) {
    let (dx, dy) = ((to.0 - from.0).abs(), (to.1 - from.1).abs());
    let (sx, sy) = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

    let (mut x, mut y) = from;
    let mut err = major / 2;
    for _ in 0..=major {
        if let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) {
            fb.set_pixel(px, py, color);
        }

        err -= minor;
        if err < 0 {
            err += major;
            if x_major {
                y += sy;
            } else {
                x += sx;
            }
        }
        if x_major {
            x += sx;
        } else {
            y += sy;
        }
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_line(
            fb,
            self.start.x as i32,
            self.start.y as i32,
            self.end.x as i32,
            self.end.y as i32,
            color,
        );
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle whose origin may lie off the left or top edge.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    let (x, width) = clip_span(x, width);
    let (y, height) = clip_span(y, height);
    fb.fill_rect(x, y, width, height, color);
}

/// Trim the part of `[start, start + len)` that falls below zero.
fn clip_span(start: i32, len: u32) -> (u32, u32) {
    if start >= 0 {
        (start as u32, len)
    } else {
        (0, len.saturating_sub(start.unsigned_abs()))
    }
}

// ============================================================================
// Tests
// ============================================================================
