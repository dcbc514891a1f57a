// File: crates/plot-render-skia/src/surface.rs
// Summary: Skia CPU raster drawing surface and its factory.

use log::debug;
use plot_core::geometry::cardinal_segments;
use plot_core::text::{anchor_origin, fit_to_width, text_rect};
use plot_core::{
    Color, DrawingSurface, PlotError, Point, RasterSurface, Rect, RenderOptions, Result, SurfaceFactory,
    TextOptions, Visibility,
};
use skia_safe as skia;

use crate::raster::Raster;
use crate::text::{TextShaper, BASE_FONT_SIZE};

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn canvas_of(surface: &mut Option<skia::Surface>) -> Result<&skia::Canvas> {
    surface
        .as_mut()
        .map(|s| s.canvas())
        .ok_or(PlotError::Disposed("surface"))
}

/// Drawing surface over a CPU raster (N32 premultiplied).
pub struct SkiaSurface {
    /// `None` once disposed.
    surface: Option<skia::Surface>,
    width: i32,
    height: i32,
    stroke_width: f32,
    font_size: f32,
    paint_text: bool,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(options: &RenderOptions) -> Result<Self> {
        options.validate()?;
        let surface = skia::surfaces::raster_n32_premul((options.width, options.height))
            .ok_or_else(|| PlotError::Surface("failed to create raster surface".into()))?;
        debug!("created {}x{} raster surface", options.width, options.height);
        Ok(Self {
            surface: Some(surface),
            width: options.width,
            height: options.height,
            stroke_width: options.stroke_width,
            font_size: BASE_FONT_SIZE,
            paint_text: true,
            shaper: TextShaper::new(),
        })
    }

    /// Release the raster. Any later call fails with [`PlotError::Disposed`].
    pub fn dispose(&mut self) -> Result<()> {
        self.surface.take().map(drop).ok_or(PlotError::Disposed("surface"))
    }

    pub fn is_disposed(&self) -> bool {
        self.surface.is_none()
    }

    fn stroke(&self, color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.stroke_width);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }

    fn clear(&mut self, color: Color) -> Result<()> {
        canvas_of(&mut self.surface)?.clear(to_skia(color));
        Ok(())
    }

    fn draw_line(&mut self, color: Color, p1: Point, p2: Point) -> Result<Rect> {
        let paint = self.stroke(color);
        canvas_of(&mut self.surface)?.draw_line(
            (p1.x as f32, p1.y as f32),
            (p2.x as f32, p2.y as f32),
            &paint,
        );
        Ok(Rect::bounding(&[p1, p2]).unwrap_or_default())
    }

    fn draw_polyline(&mut self, color: Color, points: &[Point]) -> Result<Rect> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(Rect::default());
        };
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        let paint = self.stroke(color);
        canvas_of(&mut self.surface)?.draw_path(&path, &paint);
        Ok(Rect::bounding(points).unwrap_or_default())
    }

    fn draw_smoothed_curve(&mut self, color: Color, points: &[Point], tension: f32) -> Result<Rect> {
        let segments = cardinal_segments(points, tension);
        let Some(first) = segments.first() else {
            return self.draw_polyline(color, points);
        };
        let mut path = skia::Path::new();
        path.move_to(first.from);
        for s in &segments {
            path.cubic_to(s.ctrl1, s.ctrl2, s.to);
        }
        let paint = self.stroke(color);
        canvas_of(&mut self.surface)?.draw_path(&path, &paint);
        Ok(Rect::bounding(points).unwrap_or_default())
    }

    fn draw_ellipse(&mut self, color: Color, rect: Rect) -> Result<Rect> {
        let paint = self.stroke(color);
        let oval = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        canvas_of(&mut self.surface)?.draw_oval(oval, &paint);
        Ok(rect)
    }

    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        point: Point,
        options: TextOptions,
        visible: Option<Visibility<'_>>,
    ) -> Result<Rect> {
        let size = self.font_size * options.size;
        let text = match options.max_width {
            Some(max) => fit_to_width(text, max, |s| Ok(self.shaper.measure(s, size, options.style).width))?,
            None => text.to_string(),
        };
        let paragraph = self.shaper.layout(&text, size, to_skia(color), options.style);
        let measured = plot_core::TextSize { width: paragraph.longest_line(), height: paragraph.height() };
        let origin = anchor_origin(point, options.anchor, measured);
        let rect = text_rect(origin, measured);

        let canvas = canvas_of(&mut self.surface)?;
        if self.paint_text && visible.map_or(true, |v| v(rect)) {
            paragraph.paint(canvas, origin);
        }
        Ok(rect)
    }
}

impl RasterSurface for SkiaSurface {
    type Raster = Raster;

    fn result(mut self) -> Result<Raster> {
        let surface = self.surface.as_mut().ok_or(PlotError::Disposed("surface"))?;
        Raster::read_from(surface, self.width, self.height)
    }
}

/// Creates one [`SkiaSurface`] per render pass.
#[derive(Clone, Debug)]
pub struct SkiaSurfaceFactory {
    /// Pixel size of text drawn with size multiplier 1.0.
    pub font_size: f32,
    /// When false, text is measured and laid out but not painted, which keeps
    /// output independent of installed fonts.
    pub paint_text: bool,
}

impl Default for SkiaSurfaceFactory {
    fn default() -> Self {
        Self { font_size: BASE_FONT_SIZE, paint_text: true }
    }
}

impl SkiaSurfaceFactory {
    pub fn without_text() -> Self {
        Self { paint_text: false, ..Self::default() }
    }
}

impl SurfaceFactory for SkiaSurfaceFactory {
    type Surface = SkiaSurface;

    fn create(&self, options: &RenderOptions) -> Result<SkiaSurface> {
        let mut surface = SkiaSurface::new(options)?;
        surface.font_size = self.font_size;
        surface.paint_text = self.paint_text;
        Ok(surface)
    }
}
