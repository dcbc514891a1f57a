// File: crates/plot-core/tests/common/mod.rs
// Purpose: Recording drawing surface with fixed-pitch text metrics for render assertions.

#![allow(dead_code)]

use plot_core::text::{anchor_origin, fit_to_width, text_rect};
use plot_core::{Color, DrawingSurface, Point, Rect, Result, TextOptions, TextSize, Visibility};

/// Glyph advance at text size 1.0.
pub const CHAR_WIDTH: f32 = 7.0;
/// Line height at text size 1.0.
pub const LINE_HEIGHT: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Color),
    Line { color: Color, p1: Point, p2: Point },
    Polyline { color: Color, points: Vec<Point> },
    Curve { color: Color, points: Vec<Point>, tension: f32 },
    Ellipse { color: Color, rect: Rect },
    Text { text: String, color: Color, rect: Rect, options: TextOptions, drawn: bool },
}

#[derive(Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    fn measure(text: &str, size: f32) -> TextSize {
        TextSize { width: text.chars().count() as f32 * CHAR_WIDTH * size, height: LINE_HEIGHT * size }
    }

    /// Every op that used `color`, clears excluded.
    pub fn ops_in(&self, color: Color) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| match op {
                Op::Clear(_) => false,
                Op::Line { color: c, .. }
                | Op::Polyline { color: c, .. }
                | Op::Curve { color: c, .. }
                | Op::Ellipse { color: c, .. }
                | Op::Text { color: c, .. } => *c == color,
            })
            .collect()
    }

    /// Texts in draw order as `(text, drawn)`.
    pub fn texts(&self) -> Vec<(&str, bool)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, drawn, .. } => Some((text.as_str(), *drawn)),
                _ => None,
            })
            .collect()
    }

    pub fn drawn_texts(&self) -> Vec<&str> {
        self.texts().into_iter().filter(|(_, d)| *d).map(|(t, _)| t).collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.ops.push(Op::Clear(color));
        Ok(())
    }

    fn draw_line(&mut self, color: Color, p1: Point, p2: Point) -> Result<Rect> {
        self.ops.push(Op::Line { color, p1, p2 });
        Ok(Rect::bounding(&[p1, p2]).unwrap_or_default())
    }

    fn draw_polyline(&mut self, color: Color, points: &[Point]) -> Result<Rect> {
        self.ops.push(Op::Polyline { color, points: points.to_vec() });
        Ok(Rect::bounding(points).unwrap_or_default())
    }

    fn draw_smoothed_curve(&mut self, color: Color, points: &[Point], tension: f32) -> Result<Rect> {
        self.ops.push(Op::Curve { color, points: points.to_vec(), tension });
        Ok(Rect::bounding(points).unwrap_or_default())
    }

    fn draw_ellipse(&mut self, color: Color, rect: Rect) -> Result<Rect> {
        self.ops.push(Op::Ellipse { color, rect });
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
        let text = match options.max_width {
            Some(max) => fit_to_width(text, max, |s| Ok(Self::measure(s, options.size).width))?,
            None => text.to_string(),
        };
        let size = Self::measure(&text, options.size);
        let rect = text_rect(anchor_origin(point, options.anchor, size), size);
        let drawn = visible.map_or(true, |v| v(rect));
        self.ops.push(Op::Text { text, color, rect, options, drawn });
        Ok(rect)
    }
}
