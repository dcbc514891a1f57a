// File: crates/plot-core/src/plotter.rs
// Summary: Plotter session (plots + chart-wide configuration) and the render pass over a surface.

use log::debug;

use crate::axis::{draw_coordinate_system, AxisDecor};
use crate::color::Color;
use crate::context::RenderContext;
use crate::error::{PlotError, Result};
use crate::geometry::Point;
use crate::limits::AxisLimits;
use crate::plot::{FunctionLinePlot, LinePlot, Plot, ScatterPlot};
use crate::surface::{DrawingSurface, RasterSurface, SurfaceFactory};
use crate::text::{TextAnchor, TextOptions};
use crate::theme::Theme;
use crate::types::{RenderOptions, PADDING, TITLE_TEXT_SIZE};

/// Long-lived container of plots and chart-wide display settings.
///
/// Plots render in registration order. Settings left at `None` fall back to
/// defaults at render time: axes in dark gray, text in the axis color.
#[derive(Debug)]
pub struct Plotter {
    /// `None` once disposed.
    plots: Option<Vec<Plot>>,
    axis_limits: Option<AxisLimits>,
    axis_color: Option<Color>,
    text_color: Option<Color>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    clear_color: Color,
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plotter {
    pub fn new() -> Self {
        Self {
            plots: Some(Vec::new()),
            axis_limits: None,
            axis_color: None,
            text_color: None,
            title: None,
            x_label: None,
            y_label: None,
            clear_color: Color::WHITE,
        }
    }

    // ---- configuration ------------------------------------------------------

    pub fn axis_limits(&self) -> Option<AxisLimits> { self.axis_limits }
    pub fn axis_color(&self) -> Option<Color> { self.axis_color }
    pub fn text_color(&self) -> Option<Color> { self.text_color }
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn x_label(&self) -> Option<&str> { self.x_label.as_deref() }
    pub fn y_label(&self) -> Option<&str> { self.y_label.as_deref() }
    pub fn clear_color(&self) -> Color { self.clear_color }

    /// Axis color used when drawing.
    pub fn resolved_axis_color(&self) -> Color {
        self.axis_color.unwrap_or(Color::DARK_GRAY)
    }

    /// Text color used when drawing: explicit, else the axis color.
    pub fn resolved_text_color(&self) -> Color {
        self.text_color.unwrap_or_else(|| self.resolved_axis_color())
    }

    /// Fixed limits for every pass; `None` fits them to the plots.
    pub fn set_axis_limits(&mut self, limits: Option<AxisLimits>) -> &mut Self {
        self.axis_limits = limits;
        self
    }

    pub fn set_axis_color(&mut self, color: Option<Color>) -> &mut Self {
        self.axis_color = color;
        self
    }

    pub fn set_text_color(&mut self, color: Option<Color>) -> &mut Self {
        self.text_color = color;
        self
    }

    pub fn set_title(&mut self, title: Option<&str>) -> &mut Self {
        self.title = title.map(str::to_owned);
        self
    }

    pub fn set_x_label(&mut self, label: Option<&str>) -> &mut Self {
        self.x_label = label.map(str::to_owned);
        self
    }

    pub fn set_y_label(&mut self, label: Option<&str>) -> &mut Self {
        self.y_label = label.map(str::to_owned);
        self
    }

    /// Take background, axis and text colors from `theme`.
    pub fn apply_theme(&mut self, theme: &Theme) -> &mut Self {
        self.clear_color = theme.background;
        self.axis_color = Some(theme.axis);
        self.text_color = Some(theme.text);
        self
    }

    // ---- plots --------------------------------------------------------------

    fn plots_mut(&mut self) -> Result<&mut Vec<Plot>> {
        self.plots.as_mut().ok_or(PlotError::Disposed("plotter"))
    }

    /// Registered plots in registration order.
    pub fn plots(&self) -> Result<&[Plot]> {
        self.plots.as_deref().ok_or(PlotError::Disposed("plotter"))
    }

    /// Number of registered plots (zero once disposed).
    pub fn plot_count(&self) -> usize {
        self.plots.as_ref().map_or(0, Vec::len)
    }

    /// Line through paired samples; the longer slice is truncated.
    pub fn plot_line<X, Y>(&mut self, xs: &[X], ys: &[Y]) -> Result<&mut LinePlot>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let plots = self.plots_mut()?;
        plots.push(Plot::Line(LinePlot::new(xs, ys)?));
        match plots.last_mut() {
            Some(Plot::Line(p)) => Ok(p),
            _ => unreachable!("line plot was just registered"),
        }
    }

    /// Line through `f` sampled over `[start, end]`.
    pub fn plot_function<F>(&mut self, f: F, start: f64, end: f64, step: Option<f64>) -> Result<&mut FunctionLinePlot>
    where
        F: Fn(f64) -> f64,
    {
        let plots = self.plots_mut()?;
        plots.push(Plot::Function(FunctionLinePlot::new(f, start, end, step)?));
        match plots.last_mut() {
            Some(Plot::Function(p)) => Ok(p),
            _ => unreachable!("function plot was just registered"),
        }
    }

    /// Markers at paired samples; the longer slice is truncated.
    pub fn plot_scatter<X, Y>(&mut self, xs: &[X], ys: &[Y]) -> Result<&mut ScatterPlot>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let plots = self.plots_mut()?;
        plots.push(Plot::Scatter(ScatterPlot::new(xs, ys)?));
        match plots.last_mut() {
            Some(Plot::Scatter(p)) => Ok(p),
            _ => unreachable!("scatter plot was just registered"),
        }
    }

    /// Dispose every plot and keep the configuration.
    pub fn clear(&mut self) -> Result<&mut Self> {
        let color = self.clear_color;
        self.clear_with(color)
    }

    /// Like [`clear`](Self::clear), also switching the background color.
    pub fn clear_with(&mut self, clear_color: Color) -> Result<&mut Self> {
        let plots = self.plots_mut()?;
        let disposed = dispose_all(plots);
        plots.clear();
        self.clear_color = clear_color;
        disposed.map(|_| self)
    }

    /// Dispose every plot. Registration, clearing and rendering fail afterwards.
    pub fn dispose(&mut self) -> Result<()> {
        let mut plots = self.plots.take().ok_or(PlotError::Disposed("plotter"))?;
        dispose_all(&mut plots)
    }

    pub fn is_disposed(&self) -> bool {
        self.plots.is_none()
    }

    // ---- rendering ----------------------------------------------------------

    /// Override limits, else the union of every non-empty plot's limits.
    pub fn resolve_axis_limits(&self) -> Result<AxisLimits> {
        if let Some(limits) = self.axis_limits {
            return Ok(limits);
        }
        AxisLimits::fit(self.plots()?.iter().filter_map(Plot::axis_limits))
    }

    /// Run one pass onto `surface` and hand back the context for inspection or
    /// finishing. The surface is cleared even when the pass is skipped for
    /// degenerate limits.
    pub fn execute<S: DrawingSurface>(&self, surface: S) -> Result<RenderContext<S>> {
        let plots = self.plots()?;
        let limits = self.resolve_axis_limits()?;
        let axis_color = self.resolved_axis_color();
        let text_color = self.resolved_text_color();
        let in_use = [self.clear_color, axis_color, text_color]
            .into_iter()
            .chain(plots.iter().filter_map(Plot::color));
        let mut ctx = RenderContext::new(surface, limits, self.clear_color, text_color, in_use)?;

        let Some(mapper) = ctx.mapper().copied() else {
            debug!("skipping render pass: degenerate axis limits {limits:?}");
            return Ok(ctx);
        };
        debug!("render pass {}x{} over {limits:?}", mapper.width(), mapper.height());

        let decor = AxisDecor {
            axis_color,
            text_color,
            x_label: self.x_label.as_deref(),
            y_label: self.y_label.as_deref(),
        };
        let layout = draw_coordinate_system(ctx.surface_mut(), &mapper, &decor)?;
        ctx.set_axis_layout(layout);

        for plot in plots {
            let bounds = plot.render(&mut ctx)?;
            ctx.push_plot_bounds(bounds);
        }

        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            let width = ctx.surface().width();
            ctx.surface_mut().draw_text(
                title,
                text_color,
                Point::new(PADDING, PADDING),
                TextOptions::anchored(TextAnchor::TopLeft)
                    .with_size(TITLE_TEXT_SIZE)
                    .with_max_width(width / 4),
                None,
            )?;
        }
        Ok(ctx)
    }

    /// Create a surface from `factory`, run one pass and return the finished raster.
    pub fn render<F>(
        &self,
        factory: &F,
        options: &RenderOptions,
    ) -> Result<<F::Surface as RasterSurface>::Raster>
    where
        F: SurfaceFactory,
    {
        options.validate()?;
        let surface = factory.create(options)?;
        self.execute(surface)?.result()
    }
}

/// Dispose all, reporting the first failure after trying every plot.
fn dispose_all(plots: &mut [Plot]) -> Result<()> {
    let mut first_err = None;
    for plot in plots.iter_mut() {
        if let Err(e) = plot.dispose() {
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}
