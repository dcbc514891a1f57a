// File: crates/plot-core/src/types.rs
// Summary: Shared constants (sizes, paddings, glyph sizes) and render options.

use crate::error::{PlotError, Result};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Default pen width in pixels.
pub const STROKE_WIDTH: f32 = 1.0;

/// Gap between axis decorations, legend rows and surface edges.
pub const PADDING: i32 = 5;
/// Side of the circle/cross glyph drawn at each marked sample.
pub const MARKER_SIZE: i32 = 5;
/// Upper bound on the samples taken for one function plot.
pub const MAX_FUNCTION_SAMPLES: usize = 1_000_000;
/// Tension of smoothed line plots.
pub const SPLINE_TENSION: f32 = 0.5;
/// Half-length of the perpendicular tick marks.
pub const TICK_HALF_LENGTH: i32 = 2;

pub const TITLE_TEXT_SIZE: f32 = 2.0;
pub const AXIS_LABEL_TEXT_SIZE: f32 = 1.1;

/// Output dimensions and pen width for one render pass.
/// Contract: all fields are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub stroke_width: f32,
}

impl RenderOptions {
    pub fn new(width: i32, height: i32, stroke_width: f32) -> Result<Self> {
        let opts = Self { width, height, stroke_width };
        opts.validate()?;
        Ok(opts)
    }

    /// Reject non-positive sizes; fields are public so options built by hand
    /// are validated again before a surface is created.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 {
            return Err(PlotError::InvalidOptions(format!("width must be positive, got {}", self.width)));
        }
        if self.height <= 0 {
            return Err(PlotError::InvalidOptions(format!("height must be positive, got {}", self.height)));
        }
        if !(self.stroke_width > 0.0) {
            return Err(PlotError::InvalidOptions(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, stroke_width: STROKE_WIDTH }
    }
}
