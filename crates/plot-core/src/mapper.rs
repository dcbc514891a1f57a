// File: crates/plot-core/src/mapper.rs
// Summary: Data-space <-> pixel-space transform for one surface and one set of limits.

use crate::geometry::Point;
use crate::limits::AxisLimits;

/// Mapped coordinates are clamped to `[-PIXEL_LIMIT, PIXEL_LIMIT]`, far off any
/// surface but with headroom for rectangle arithmetic around a point.
pub const PIXEL_LIMIT: i32 = i32::MAX / 2;

#[inline]
fn to_pixel(v: f64) -> i32 {
    let limit = PIXEL_LIMIT as f64;
    v.round().clamp(-limit, limit) as i32
}

/// Maps data coordinates onto a `width x height` pixel grid with the y axis inverted.
///
/// Callers must not map through degenerate limits (zero width or height); the
/// render pass checks [`AxisLimits::is_degenerate`] before any drawing.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    width: i32,
    height: i32,
    limits: AxisLimits,
}

impl CoordinateMapper {
    pub fn new(width: i32, height: i32, limits: AxisLimits) -> Self {
        Self { width, height, limits }
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn limits(&self) -> &AxisLimits { &self.limits }

    #[inline]
    pub fn px_per_unit_x(&self) -> f64 {
        self.width as f64 / self.limits.width()
    }

    #[inline]
    pub fn px_per_unit_y(&self) -> f64 {
        self.height as f64 / self.limits.height()
    }

    #[inline]
    pub fn pixel_from_location(&self, x: f64, y: f64) -> Point {
        let px = (x - self.limits.x_min()) * self.px_per_unit_x();
        let py = self.height as f64 - (y - self.limits.y_min()) * self.px_per_unit_y();
        Point::new(to_pixel(px), to_pixel(py))
    }

    #[inline]
    pub fn location_from_pixel(&self, p: Point) -> (f64, f64) {
        let x = self.limits.x_min() + p.x as f64 / self.px_per_unit_x();
        let y = self.limits.y_min() + (self.height as f64 - p.y as f64) / self.px_per_unit_y();
        (x, y)
    }
}
