// File: crates/plot-core/src/surface.rs
// Summary: Capability traits the engine draws through: drawing surface and raster sink.

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::text::TextOptions;
use crate::types::RenderOptions;

/// Predicate over the rectangle a text would occupy; `false` suppresses drawing.
pub type Visibility<'a> = &'a dyn Fn(Rect) -> bool;

/// Primitive 2D operations plus text metrics. Every drawing call returns the
/// pixel rectangle it touched.
pub trait DrawingSurface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color) -> Result<()>;

    fn draw_line(&mut self, color: Color, p1: Point, p2: Point) -> Result<Rect>;

    /// Smoothed curve through all `points`. The returned rectangle bounds the
    /// points themselves, not the curve, which may bulge past them.
    fn draw_smoothed_curve(&mut self, color: Color, points: &[Point], tension: f32) -> Result<Rect>;

    fn draw_ellipse(&mut self, color: Color, rect: Rect) -> Result<Rect>;

    /// Lay out and draw `text` anchored at `point`.
    ///
    /// With `options.max_width` the text is truncated with a trailing ellipsis
    /// until it fits. When `visible` rejects the computed rectangle nothing is
    /// drawn, but the rectangle is still returned.
    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        point: Point,
        options: TextOptions,
        visible: Option<Visibility<'_>>,
    ) -> Result<Rect>;

    fn draw_polyline(&mut self, color: Color, points: &[Point]) -> Result<Rect> {
        for pair in points.windows(2) {
            self.draw_line(color, pair[0], pair[1])?;
        }
        Ok(Rect::bounding(points).unwrap_or_default())
    }

    fn draw_circle(&mut self, color: Color, midpoint: Point, size: i32) -> Result<Rect> {
        self.draw_ellipse(color, Rect::centered(midpoint, size))
    }

    fn draw_cross(&mut self, color: Color, midpoint: Point, size: i32) -> Result<Rect> {
        let r = Rect::centered(midpoint, size);
        self.draw_line(color, Point::new(r.left, r.top), Point::new(r.right, r.bottom))?;
        self.draw_line(color, Point::new(r.left, r.bottom), Point::new(r.right, r.top))?;
        Ok(r)
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> i32 { (**self).width() }
    fn height(&self) -> i32 { (**self).height() }
    fn clear(&mut self, color: Color) -> Result<()> { (**self).clear(color) }
    fn draw_line(&mut self, color: Color, p1: Point, p2: Point) -> Result<Rect> {
        (**self).draw_line(color, p1, p2)
    }
    fn draw_smoothed_curve(&mut self, color: Color, points: &[Point], tension: f32) -> Result<Rect> {
        (**self).draw_smoothed_curve(color, points, tension)
    }
    fn draw_ellipse(&mut self, color: Color, rect: Rect) -> Result<Rect> {
        (**self).draw_ellipse(color, rect)
    }
    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        point: Point,
        options: TextOptions,
        visible: Option<Visibility<'_>>,
    ) -> Result<Rect> {
        (**self).draw_text(text, color, point, options, visible)
    }
    fn draw_polyline(&mut self, color: Color, points: &[Point]) -> Result<Rect> {
        (**self).draw_polyline(color, points)
    }
    fn draw_circle(&mut self, color: Color, midpoint: Point, size: i32) -> Result<Rect> {
        (**self).draw_circle(color, midpoint, size)
    }
    fn draw_cross(&mut self, color: Color, midpoint: Point, size: i32) -> Result<Rect> {
        (**self).draw_cross(color, midpoint, size)
    }
}

/// A drawing surface backed by a raster buffer that can be finalized.
pub trait RasterSurface: DrawingSurface {
    type Raster;

    /// Consume the surface and yield the final raster for encoding or saving.
    fn result(self) -> Result<Self::Raster>;
}

/// Produces a fresh surface for each render pass.
pub trait SurfaceFactory {
    type Surface: RasterSurface;

    /// `options` has already been validated by the caller.
    fn create(&self, options: &RenderOptions) -> Result<Self::Surface>;
}
