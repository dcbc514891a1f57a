// File: crates/plot-core/src/context.rs
// Summary: One render pass: surface, resolved limits, mapper and the per-surface allocator and legend.

use crate::allocator::ColorAllocator;
use crate::axis::AxisLayout;
use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::legend::LegendLayout;
use crate::limits::AxisLimits;
use crate::mapper::CoordinateMapper;
use crate::plot::Marker;
use crate::surface::{DrawingSurface, RasterSurface};

/// Drawing target of a single pass plus the state that lives exactly as long as it.
///
/// The color allocator and legend accumulator are owned here and dropped with
/// the context; nothing carries over to the next pass.
#[derive(Debug)]
pub struct RenderContext<S> {
    surface: S,
    limits: AxisLimits,
    mapper: Option<CoordinateMapper>,
    allocator: ColorAllocator,
    legend: LegendLayout,
    scratch: Vec<Point>,
    axis_layout: Option<AxisLayout>,
    plot_bounds: Vec<Option<Rect>>,
}

impl<S: DrawingSurface> RenderContext<S> {
    /// Bind `surface` to `limits` and clear it with `clear_color`.
    ///
    /// `in_use` seeds the color allocator (background, axis, text and explicit plot colors).
    pub fn new<I>(
        mut surface: S,
        limits: AxisLimits,
        clear_color: Color,
        legend_text_color: Color,
        in_use: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        surface.clear(clear_color)?;
        let width = surface.width();
        let height = surface.height();
        let mapper = (!limits.is_degenerate()).then(|| CoordinateMapper::new(width, height, limits));
        Ok(Self {
            surface,
            limits,
            mapper,
            allocator: ColorAllocator::new(in_use),
            legend: LegendLayout::new(width, legend_text_color),
            scratch: Vec::new(),
            axis_layout: None,
            plot_bounds: Vec::new(),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn limits(&self) -> &AxisLimits {
        &self.limits
    }

    /// `None` when the limits are degenerate and nothing can be mapped.
    pub fn mapper(&self) -> Option<&CoordinateMapper> {
        self.mapper.as_ref()
    }

    pub fn is_degenerate(&self) -> bool {
        self.mapper.is_none()
    }

    pub fn pixel_from_location(&self, x: f64, y: f64) -> Option<Point> {
        self.mapper.as_ref().map(|m| m.pixel_from_location(x, y))
    }

    pub fn location_from_pixel(&self, p: Point) -> Option<(f64, f64)> {
        self.mapper.as_ref().map(|m| m.location_from_pixel(p))
    }

    pub fn allocator(&self) -> &ColorAllocator {
        &self.allocator
    }

    pub fn allocate_color(&mut self) -> Color {
        self.allocator.allocate()
    }

    pub fn legend(&self) -> &LegendLayout {
        &self.legend
    }

    /// Append a legend row below the previous one.
    pub fn draw_legend_entry(&mut self, color: Color, marker: Marker, name: &str, draw_line: bool) -> Result<Rect> {
        self.legend.draw_entry(&mut self.surface, color, marker, name, draw_line)
    }

    /// Axis decisions of this pass; `None` if the pass was skipped.
    pub fn axis_layout(&self) -> Option<&AxisLayout> {
        self.axis_layout.as_ref()
    }

    pub(crate) fn set_axis_layout(&mut self, layout: AxisLayout) {
        self.axis_layout = Some(layout);
    }

    /// Touched rectangle of each plot in registration order (`None`: nothing drawn).
    /// Empty when the pass was skipped.
    pub fn plot_bounds(&self) -> &[Option<Rect>] {
        &self.plot_bounds
    }

    pub(crate) fn push_plot_bounds(&mut self, bounds: Option<Rect>) {
        self.plot_bounds.push(bounds);
    }

    /// Borrow the point scratch buffer for one plot. Hand it back with
    /// [`restore_scratch`](Self::restore_scratch) on every exit path.
    pub(crate) fn take_scratch(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.scratch)
    }

    pub(crate) fn restore_scratch(&mut self, mut points: Vec<Point>) {
        points.clear();
        self.scratch = points;
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: RasterSurface> RenderContext<S> {
    /// Finish the pass and yield the surface's raster.
    pub fn result(self) -> Result<S::Raster> {
        self.surface.result()
    }
}
