// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plotting session, plot types and surface traits.

pub mod allocator;
pub mod axis;
pub mod color;
pub mod context;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod limits;
pub mod mapper;
pub mod palette;
pub mod plot;
pub mod plotter;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use allocator::ColorAllocator;
pub use axis::{format_tick_label, AxisLayout, TickStep};
pub use color::Color;
pub use context::RenderContext;
pub use error::{PlotError, Result};
pub use geometry::{Point, Rect};
pub use legend::LegendLayout;
pub use limits::AxisLimits;
pub use mapper::CoordinateMapper;
pub use plot::{FunctionLinePlot, LinePlot, LineStyle, Marker, Plot, SampleBuffer, ScatterPlot};
pub use plotter::Plotter;
pub use surface::{DrawingSurface, RasterSurface, SurfaceFactory, Visibility};
pub use text::{TextAnchor, TextOptions, TextSize, TextStyle};
pub use theme::Theme;
pub use types::RenderOptions;
