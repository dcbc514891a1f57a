// File: crates/plot-core/src/plot.rs
// Summary: Plot variants (line, sampled function, scatter), sample storage and per-plot rendering.

use log::{debug, warn};

use crate::color::Color;
use crate::context::RenderContext;
use crate::error::{PlotError, Result};
use crate::geometry::{Bounds, Point, Rect};
use crate::limits::AxisLimits;
use crate::surface::DrawingSurface;
use crate::types::{MARKER_SIZE, MAX_FUNCTION_SAMPLES, SPLINE_TENSION};

/// Glyph drawn at each sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Cross,
}

impl Marker {
    /// Draw the glyph centered on `point`; `None` draws nothing.
    pub fn draw<S>(self, surface: &mut S, color: Color, point: Point, size: i32) -> Result<Option<Rect>>
    where
        S: DrawingSurface + ?Sized,
    {
        match self {
            Marker::None => Ok(None),
            Marker::Circle => surface.draw_circle(color, point, size).map(Some),
            Marker::Cross => surface.draw_cross(color, point, size).map(Some),
        }
    }
}

/// How consecutive samples of a line-like plot are connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// Straight segments.
    #[default]
    Polyline,
    /// Cardinal spline with a fixed tension; needs at least three points.
    Smoothed,
}

/// Paired x/y samples, fixed at construction and released exactly once.
#[derive(Debug)]
pub struct SampleBuffer {
    data: Option<(Box<[f64]>, Box<[f64]>)>,
    count: usize,
}

impl SampleBuffer {
    /// Copy paired samples, truncating to the shorter slice.
    pub fn from_slices<X, Y>(xs: &[X], ys: &[Y]) -> Self
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let count = xs.len().min(ys.len());
        if xs.len() != ys.len() {
            warn!(
                "x/y sample lengths differ ({} vs {}); using the first {count}",
                xs.len(),
                ys.len()
            );
        }
        let x: Box<[f64]> = xs[..count].iter().map(|&v| v.into()).collect();
        let y: Box<[f64]> = ys[..count].iter().map(|&v| v.into()).collect();
        Self { data: Some((x, y)), count }
    }

    fn from_columns(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let count = xs.len().min(ys.len());
        Self { data: Some((xs.into_boxed_slice(), ys.into_boxed_slice())), count }
    }

    /// Number of sample pairs; stays valid after release.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_released(&self) -> bool {
        self.data.is_none()
    }

    pub fn xs(&self) -> Result<&[f64]> {
        self.columns().map(|(x, _)| x)
    }

    pub fn ys(&self) -> Result<&[f64]> {
        self.columns().map(|(_, y)| y)
    }

    pub fn columns(&self) -> Result<(&[f64], &[f64])> {
        match &self.data {
            Some((x, y)) => Ok((x, y)),
            None => Err(PlotError::Disposed("sample buffer")),
        }
    }

    /// Free the sample storage. A second release fails.
    pub fn release(&mut self) -> Result<()> {
        match self.data.take() {
            Some(_) => Ok(()),
            None => Err(PlotError::Disposed("sample buffer")),
        }
    }
}

/// Display attributes shared by every plot variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotStyle {
    /// Fixed color; allocated per surface when absent.
    pub color: Option<Color>,
    /// Legend name; plots without one get no legend row.
    pub name: Option<String>,
}

macro_rules! style_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn color(&self) -> Option<Color> {
                self.style.color
            }
            pub fn name(&self) -> Option<&str> {
                self.style.name.as_deref()
            }
            pub fn samples(&self) -> &SampleBuffer {
                &self.samples
            }
            /// Cached at construction; `None` for a plot without samples.
            pub fn axis_limits(&self) -> Option<AxisLimits> {
                self.limits
            }
            pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
                self.style.color = color;
                self
            }
            pub fn set_name(&mut self, name: Option<&str>) -> &mut Self {
                self.style.name = name.map(str::to_owned);
                self
            }
        }
    };
}

/// Line through paired samples, optionally marked.
#[derive(Debug)]
pub struct LinePlot {
    samples: SampleBuffer,
    limits: Option<AxisLimits>,
    style: PlotStyle,
    line_style: LineStyle,
    marker: Marker,
}

impl LinePlot {
    pub fn new<X, Y>(xs: &[X], ys: &[Y]) -> Result<Self>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let samples = SampleBuffer::from_slices(xs, ys);
        let limits = sample_limits(&samples)?;
        Ok(Self {
            samples,
            limits,
            style: PlotStyle::default(),
            line_style: LineStyle::default(),
            marker: Marker::None,
        })
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
    pub fn marker(&self) -> Marker {
        self.marker
    }
    pub fn set_line_style(&mut self, line_style: LineStyle) -> &mut Self {
        self.line_style = line_style;
        self
    }
    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.marker = marker;
        self
    }
}

style_setters!(LinePlot);

/// Line through samples of `f` over `[start, end]`. Never marked.
#[derive(Debug)]
pub struct FunctionLinePlot {
    samples: SampleBuffer,
    limits: Option<AxisLimits>,
    style: PlotStyle,
    line_style: LineStyle,
}

impl FunctionLinePlot {
    /// Sample `f` every `step` (default: a hundredth of the range) from `start`,
    /// clamping the last x to `end`. Steps that would take more than
    /// [`MAX_FUNCTION_SAMPLES`] samples are rejected.
    pub fn new<F>(f: F, start: f64, end: f64, step: Option<f64>) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        if !start.is_finite() || !end.is_finite() {
            return Err(PlotError::InvalidArgument(format!(
                "function range must be finite, got [{start}, {end}]"
            )));
        }
        if start > end {
            return Err(PlotError::InvalidArgument(format!(
                "function range start {start} is past its end {end}"
            )));
        }
        let count = match step {
            Some(s) if !(s > 0.0 && s.is_finite()) => {
                return Err(PlotError::InvalidArgument(format!(
                    "function step must be positive and finite, got {s}"
                )));
            }
            Some(s) => {
                let intervals = ((end - start) / s).floor();
                if !(intervals < MAX_FUNCTION_SAMPLES as f64) {
                    return Err(PlotError::InvalidArgument(format!(
                        "function step {s} over [{start}, {end}] exceeds {MAX_FUNCTION_SAMPLES} samples"
                    )));
                }
                intervals as usize + 1
            }
            // Empty range: a single sample at `start`.
            None if start == end => 1,
            None => 101,
        };
        let step = step.unwrap_or((end - start) / 100.0);

        let xs: Vec<f64> = (0..count).map(|i| (start + i as f64 * step).min(end)).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let samples = SampleBuffer::from_columns(xs, ys);
        let limits = match sample_limits(&samples)? {
            Some(l) => Some(AxisLimits::new(start, end, l.y_min(), l.y_max())?),
            None => None,
        };
        debug!("sampled function over [{start}, {end}] with {count} points");
        Ok(Self { samples, limits, style: PlotStyle::default(), line_style: LineStyle::default() })
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
    pub fn set_line_style(&mut self, line_style: LineStyle) -> &mut Self {
        self.line_style = line_style;
        self
    }
}

style_setters!(FunctionLinePlot);

/// Markers only; nothing is drawn while the marker is [`Marker::None`].
#[derive(Debug)]
pub struct ScatterPlot {
    samples: SampleBuffer,
    limits: Option<AxisLimits>,
    style: PlotStyle,
    marker: Marker,
}

impl ScatterPlot {
    pub fn new<X, Y>(xs: &[X], ys: &[Y]) -> Result<Self>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let samples = SampleBuffer::from_slices(xs, ys);
        let limits = sample_limits(&samples)?;
        Ok(Self { samples, limits, style: PlotStyle::default(), marker: Marker::None })
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.marker = marker;
        self
    }
}

style_setters!(ScatterPlot);

fn sample_limits(samples: &SampleBuffer) -> Result<Option<AxisLimits>> {
    let (xs, ys) = samples.columns()?;
    AxisLimits::from_samples(xs, ys).transpose()
}

/// Closed set of plot kinds held by a [`crate::Plotter`], in registration order.
#[derive(Debug)]
pub enum Plot {
    Line(LinePlot),
    Function(FunctionLinePlot),
    Scatter(ScatterPlot),
}

impl Plot {
    fn parts(&self) -> (&SampleBuffer, &PlotStyle, Option<LineStyle>, Marker) {
        match self {
            Plot::Line(p) => (&p.samples, &p.style, Some(p.line_style), p.marker),
            Plot::Function(p) => (&p.samples, &p.style, Some(p.line_style), Marker::None),
            Plot::Scatter(p) => (&p.samples, &p.style, None, p.marker),
        }
    }

    fn samples_mut(&mut self) -> &mut SampleBuffer {
        match self {
            Plot::Line(p) => &mut p.samples,
            Plot::Function(p) => &mut p.samples,
            Plot::Scatter(p) => &mut p.samples,
        }
    }

    pub fn axis_limits(&self) -> Option<AxisLimits> {
        match self {
            Plot::Line(p) => p.limits,
            Plot::Function(p) => p.limits,
            Plot::Scatter(p) => p.limits,
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.parts().1.color
    }

    pub fn name(&self) -> Option<&str> {
        self.parts().1.name.as_deref()
    }

    pub fn samples(&self) -> &SampleBuffer {
        self.parts().0
    }

    pub fn is_disposed(&self) -> bool {
        self.samples().is_released()
    }

    /// Release the sample storage. Disposing twice fails.
    pub fn dispose(&mut self) -> Result<()> {
        self.samples_mut().release()
    }

    /// Draw this plot onto the context's surface and register its legend row.
    ///
    /// Returns the pixel rectangle touched by the plot itself (legend excluded),
    /// or `None` when nothing was drawn.
    pub fn render<S>(&self, ctx: &mut RenderContext<S>) -> Result<Option<Rect>>
    where
        S: DrawingSurface,
    {
        let (samples, style, line, marker) = self.parts();
        let (xs, ys) = samples.columns()?;
        if line.is_none() && marker == Marker::None {
            return Ok(None);
        }
        if samples.is_empty() {
            return Ok(None);
        }
        let Some(mapper) = ctx.mapper().copied() else {
            return Ok(None);
        };
        let color = match style.color {
            Some(c) => c,
            None => ctx.allocate_color(),
        };

        let mut points = ctx.take_scratch();
        points.clear();
        points.extend(xs.iter().zip(ys).map(|(&x, &y)| mapper.pixel_from_location(x, y)));
        let drawn = draw_samples(ctx.surface_mut(), color, &points, line, marker);
        ctx.restore_scratch(points);
        let bounds = drawn?;

        if let Some(name) = style.name.as_deref() {
            ctx.draw_legend_entry(color, marker, name, line.is_some())?;
        }
        Ok(bounds)
    }
}

fn draw_samples<S>(
    surface: &mut S,
    color: Color,
    points: &[Point],
    line: Option<LineStyle>,
    marker: Marker,
) -> Result<Option<Rect>>
where
    S: DrawingSurface + ?Sized,
{
    let mut bounds = Bounds::default();
    match line {
        Some(LineStyle::Smoothed) if points.len() >= 3 => {
            bounds.include(surface.draw_smoothed_curve(color, points, SPLINE_TENSION)?);
        }
        Some(_) => bounds.include(surface.draw_polyline(color, points)?),
        None => {}
    }
    for &p in points {
        if let Some(r) = marker.draw(surface, color, p, MARKER_SIZE)? {
            bounds.include(r);
        }
    }
    Ok(bounds.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unequal_lengths_truncate() {
        let b = SampleBuffer::from_slices(&[1.0f32, 2.0, 3.0], &[4.0f64, 5.0]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.xs().unwrap(), &[1.0, 2.0]);
        assert_eq!(b.ys().unwrap(), &[4.0, 5.0]);
    }

    #[test]
    fn release_is_single_shot() {
        let mut b = SampleBuffer::from_slices(&[1.0], &[2.0]);
        b.release().unwrap();
        assert_eq!(b.release(), Err(PlotError::Disposed("sample buffer")));
        assert_eq!(b.xs(), Err(PlotError::Disposed("sample buffer")));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn line_plot_limits_cover_samples() {
        let p = LinePlot::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(p.axis_limits(), Some(AxisLimits::new(0.0, 2.0, 0.0, 1.0).unwrap()));
    }

    #[test]
    fn empty_plot_has_no_limits() {
        let p = ScatterPlot::new::<f64, f64>(&[], &[]).unwrap();
        assert_eq!(p.axis_limits(), None);
    }

    #[test]
    fn function_sampling_clamps_to_end() {
        let p = FunctionLinePlot::new(|x| x * x, 0.0, 1.0, Some(0.3)).unwrap();
        assert_eq!(p.samples().xs().unwrap().len(), 4);
        let limits = p.axis_limits().unwrap();
        assert_eq!((limits.x_min(), limits.x_max()), (0.0, 1.0));
        assert!((limits.y_max() - 0.81).abs() < 1e-12);

        let dense = FunctionLinePlot::new(|x| x, -1.0, 1.0, None).unwrap();
        let xs = dense.samples().xs().unwrap();
        assert_eq!(xs.len(), 101);
        assert!((xs[100] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn function_rejects_bad_ranges() {
        assert!(matches!(
            FunctionLinePlot::new(|x| x, 1.0, 0.0, None),
            Err(PlotError::InvalidArgument(_))
        ));
        assert!(matches!(
            FunctionLinePlot::new(|x| x, 0.0, 1.0, Some(0.0)),
            Err(PlotError::InvalidArgument(_))
        ));
        assert!(matches!(
            FunctionLinePlot::new(|x| x, 0.0, 1.0, Some(f64::NAN)),
            Err(PlotError::InvalidArgument(_))
        ));
    }

    #[test]
    fn function_rejects_oversampling() {
        for step in [1e-300, 1e-9, f64::MIN_POSITIVE] {
            assert!(matches!(
                FunctionLinePlot::new(|x| x, 0.0, 1.0, Some(step)),
                Err(PlotError::InvalidArgument(_))
            ));
        }
        let p = FunctionLinePlot::new(|x| x, 0.0, 1.0, Some(1.0 / 1024.0)).expect("within cap");
        assert_eq!(p.samples().len(), 1025);
    }

    #[test]
    fn nan_samples_fail_construction() {
        assert!(matches!(
            LinePlot::new(&[f64::NAN], &[f64::NAN]),
            Err(PlotError::InvalidLimits(_))
        ));
        assert!(matches!(
            ScatterPlot::new(&[0.0, 1.0], &[1.0, f64::NAN]),
            Err(PlotError::InvalidLimits(_))
        ));
        assert!(matches!(
            FunctionLinePlot::new(|x: f64| x.ln(), -1.0, 1.0, None),
            Err(PlotError::InvalidLimits(_))
        ));
    }
}
