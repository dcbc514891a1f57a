// File: crates/plot-core/src/legend.rs
// Summary: Per-surface legend accumulator placing rows top-to-bottom at the top-right corner.

use log::debug;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::plot::Marker;
use crate::surface::DrawingSurface;
use crate::text::{TextAnchor, TextOptions};
use crate::types::{MARKER_SIZE, PADDING};

/// Length of the line sample drawn left of each name.
pub const LEGEND_LINE_LENGTH: i32 = 26;
/// Maximum width of a legend name before it is truncated.
pub const LEGEND_TEXT_WIDTH: i32 = 150;
/// Width of the legend column.
pub const LEGEND_WIDTH: i32 = PADDING + LEGEND_LINE_LENGTH + LEGEND_TEXT_WIDTH;

/// Stateful legend placer for one render pass.
#[derive(Clone, Debug)]
pub struct LegendLayout {
    x: i32,
    last: Rect,
    text_color: Color,
    rows: Vec<Rect>,
}

impl LegendLayout {
    pub fn new(surface_width: i32, text_color: Color) -> Self {
        let x = surface_width - PADDING - LEGEND_WIDTH;
        Self { x, last: Rect::from_ltwh(x, PADDING, LEGEND_WIDTH, 0), text_color, rows: Vec::new() }
    }

    /// Rows drawn so far, top to bottom.
    pub fn rows(&self) -> &[Rect] {
        &self.rows
    }

    /// Draw one legend row below the previous one and return its rectangle.
    /// The row is as tall as the drawn name.
    pub fn draw_entry<S>(
        &mut self,
        surface: &mut S,
        color: Color,
        marker: Marker,
        name: &str,
        draw_line: bool,
    ) -> Result<Rect>
    where
        S: DrawingSurface + ?Sized,
    {
        let y = self.last.bottom + PADDING;
        let line_start = self.x;
        let line_mid = self.x + LEGEND_LINE_LENGTH / 2;
        let line_end = self.x + LEGEND_LINE_LENGTH;

        let text = surface.draw_text(
            name,
            self.text_color,
            Point::new(line_end + PADDING, y),
            TextOptions::anchored(TextAnchor::TopLeft).with_max_width(LEGEND_TEXT_WIDTH),
            None,
        )?;
        let height = text.height();
        let line_y = y + height / 2;

        if draw_line {
            surface.draw_line(color, Point::new(line_start, line_y), Point::new(line_end, line_y))?;
        }
        marker.draw(surface, color, Point::new(line_mid, line_y), MARKER_SIZE)?;

        let row = Rect::from_ltwh(self.x, y, LEGEND_WIDTH, height);
        debug!("legend row '{name}' at {row:?}");
        self.last = row;
        self.rows.push(row);
        Ok(row)
    }
}
