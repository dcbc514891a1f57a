// File: crates/plot-core/src/axis.rs
// Summary: Axis lines with arrowheads, decimal tick step search, tick walk and label formatting.

use log::debug;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::mapper::CoordinateMapper;
use crate::surface::DrawingSurface;
use crate::text::{TextAnchor, TextOptions, TextStyle};
use crate::types::{AXIS_LABEL_TEXT_SIZE, PADDING, TICK_HALF_LENGTH};

/// Largest decimal exponent tried for a tick step.
pub const MAX_STEP_EXPONENT: i32 = 10;
/// Smallest decimal exponent tried for a tick step.
pub const MIN_STEP_EXPONENT: i32 = -9;

/// Chosen tick spacing: `size == 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStep {
    pub exponent: i32,
    pub size: f64,
}

/// Largest power of ten whose pixel length fits a quarter of the axis
/// (integer quarter, so at least about four divisions are visible).
pub fn choose_tick_step(axis_len_px: i32, px_per_unit: f64) -> TickStep {
    let budget = (axis_len_px / 4) as f64;
    for exponent in (MIN_STEP_EXPONENT..=MAX_STEP_EXPONENT).rev() {
        let size = 10f64.powi(exponent);
        if size * px_per_unit <= budget {
            return TickStep { exponent, size };
        }
    }
    TickStep { exponent: MIN_STEP_EXPONENT, size: 10f64.powi(MIN_STEP_EXPONENT) }
}

/// Render tick index `value` scaled by `10^exponent`.
///
/// `format_tick_label(5, 2) == "500"`, `format_tick_label(5, -2) == "0.05"`,
/// `format_tick_label(3, 6) == "3E+6"`, `format_tick_label(1, -9) == "1E-9"`.
pub fn format_tick_label(value: i64, exponent: i32) -> String {
    if value < 0 {
        return format!("-{}", format_magnitude(value.unsigned_abs(), exponent));
    }
    format_magnitude(value as u64, exponent)
}

fn format_magnitude(value: u64, exponent: i32) -> String {
    let digits = value.to_string();
    let len = digits.len() as i32;
    if exponent > 4 {
        return format!("{digits}E+{exponent}");
    }
    if -exponent - len > 3 {
        return format!("{digits}E-{}", -exponent);
    }
    match exponent {
        0 => digits,
        e if e > 0 => digits + &"0".repeat(e as usize),
        e => {
            let frac = (-e) as usize;
            let padded = format!("{}{digits}", "0".repeat((frac + 1).saturating_sub(digits.len())));
            let split = padded.len() - frac;
            format!("{}.{}", &padded[..split], &padded[split..])
        }
    }
}

/// Colors and end labels for the coordinate system.
#[derive(Clone, Copy, Debug)]
pub struct AxisDecor<'a> {
    pub axis_color: Color,
    pub text_color: Color,
    pub x_label: Option<&'a str>,
    pub y_label: Option<&'a str>,
}

/// What the axis pass decided, for callers and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    pub origin: Point,
    pub x_step: TickStep,
    pub y_step: TickStep,
    /// Rectangle reserved by the x end label (zero-size at the axis end when absent).
    pub x_label_rect: Rect,
    /// Rectangle reserved by the y end label (zero-size at the axis end when absent).
    pub y_label_rect: Rect,
}

fn label_text(label: Option<&str>) -> Option<&str> {
    label.filter(|l| !l.trim().is_empty())
}

/// Draw both axes through the data origin, their end labels, ticks and tick labels.
///
/// Only odd tick indices are labelled; each label is drawn only if it clears the
/// end-label zone of its axis, checked per candidate.
pub fn draw_coordinate_system<S>(
    surface: &mut S,
    mapper: &CoordinateMapper,
    decor: &AxisDecor<'_>,
) -> Result<AxisLayout>
where
    S: DrawingSurface + ?Sized,
{
    let width = mapper.width();
    let height = mapper.height();
    let limits = *mapper.limits();
    let origin = mapper.pixel_from_location(0.0, 0.0);
    let (axis_color, text_color) = (decor.axis_color, decor.text_color);

    let mut x_label_rect = Rect::from_ltwh(width, origin.y, 0, 0);
    let mut y_label_rect = Rect::from_ltwh(origin.x, 0, 0, 0);

    if let Some(label) = label_text(decor.x_label) {
        x_label_rect = surface.draw_text(
            label,
            text_color,
            Point::new(width - PADDING, origin.y - 2 * PADDING),
            TextOptions::anchored(TextAnchor::BottomRight)
                .with_size(AXIS_LABEL_TEXT_SIZE)
                .with_style(TextStyle::BOLD)
                .with_max_width(width / 8),
            None,
        )?;
    }
    if let Some(label) = label_text(decor.y_label) {
        y_label_rect = surface.draw_text(
            label,
            text_color,
            Point::new(origin.x + 2 * PADDING, PADDING),
            TextOptions::anchored(TextAnchor::TopLeft)
                .with_size(AXIS_LABEL_TEXT_SIZE)
                .with_style(TextStyle::BOLD)
                .with_max_width(width / 8),
            None,
        )?;
    }

    // X axis with arrowhead at the right edge.
    surface.draw_line(axis_color, Point::new(0, origin.y), Point::new(width, origin.y))?;
    surface.draw_line(axis_color, Point::new(width - 5, origin.y - 3), Point::new(width, origin.y))?;
    surface.draw_line(axis_color, Point::new(width - 5, origin.y + 3), Point::new(width, origin.y))?;

    let x_step = choose_tick_step(width, mapper.px_per_unit_x());
    let x_tick = |s: &mut S, p: Point| {
        s.draw_line(
            axis_color,
            Point::new(p.x, origin.y - TICK_HALF_LENGTH),
            Point::new(p.x, origin.y + TICK_HALF_LENGTH),
        )
    };
    let x_label_options = TextOptions::anchored(TextAnchor::TopCenter);

    let mut i = first_index_above(limits.x_min(), x_step.size);
    let mut walk = TickWalk::new(width);
    loop {
        let x = i as f64 * x_step.size;
        if !(x < limits.x_max()) {
            break;
        }
        let p = mapper.pixel_from_location(x, 0.0);
        if p.x > width - PADDING || !walk.advance(p.x) {
            break;
        }
        x_tick(surface, p)?;
        if i % 2 != 0 {
            let clear_of_label = |r: Rect| r.right <= x_label_rect.left - PADDING;
            surface.draw_text(
                &format_tick_label(i, x_step.exponent),
                text_color,
                Point::new(p.x, p.y + PADDING),
                x_label_options,
                Some(&clear_of_label),
            )?;
        }
        let Some(next) = i.checked_add(1) else { break };
        i = next;
    }

    let mut i = first_index_below(limits.x_max(), x_step.size);
    let mut walk = TickWalk::new(width);
    loop {
        let x = i as f64 * x_step.size;
        if !(x > limits.x_min()) {
            break;
        }
        let p = mapper.pixel_from_location(x, 0.0);
        if !walk.advance(p.x) {
            break;
        }
        x_tick(surface, p)?;
        if i % 2 != 0 {
            let inside_left_edge = |r: Rect| r.left >= PADDING;
            surface.draw_text(
                &format_tick_label(i, x_step.exponent),
                text_color,
                Point::new(p.x, p.y + PADDING),
                x_label_options,
                Some(&inside_left_edge),
            )?;
        }
        let Some(next) = i.checked_sub(1) else { break };
        i = next;
    }

    // Y axis with arrowhead at the top edge.
    surface.draw_line(axis_color, Point::new(origin.x, 0), Point::new(origin.x, height))?;
    surface.draw_line(axis_color, Point::new(origin.x - 3, 5), Point::new(origin.x, 0))?;
    surface.draw_line(axis_color, Point::new(origin.x + 3, 5), Point::new(origin.x, 0))?;

    let y_step = choose_tick_step(height, mapper.px_per_unit_y());
    let y_tick = |s: &mut S, p: Point| {
        s.draw_line(
            axis_color,
            Point::new(origin.x - TICK_HALF_LENGTH, p.y),
            Point::new(origin.x + TICK_HALF_LENGTH, p.y),
        )
    };
    let y_label_options = TextOptions::anchored(TextAnchor::CenterLeft);

    let mut i = first_index_above(limits.y_min(), y_step.size);
    let mut walk = TickWalk::new(height);
    loop {
        let y = i as f64 * y_step.size;
        if !(y < limits.y_max()) {
            break;
        }
        let p = mapper.pixel_from_location(0.0, y);
        if p.y < PADDING || !walk.advance(p.y) {
            break;
        }
        y_tick(surface, p)?;
        if i % 2 != 0 {
            let below_label = |r: Rect| r.top >= y_label_rect.bottom + PADDING;
            surface.draw_text(
                &format_tick_label(i, y_step.exponent),
                text_color,
                Point::new(p.x + PADDING, p.y),
                y_label_options,
                Some(&below_label),
            )?;
        }
        let Some(next) = i.checked_add(1) else { break };
        i = next;
    }

    let mut i = first_index_below(limits.y_max(), y_step.size);
    let mut walk = TickWalk::new(height);
    loop {
        let y = i as f64 * y_step.size;
        if !(y > limits.y_min()) {
            break;
        }
        let p = mapper.pixel_from_location(0.0, y);
        if !walk.advance(p.y) {
            break;
        }
        y_tick(surface, p)?;
        if i % 2 != 0 {
            let above_bottom = |r: Rect| r.bottom <= height + PADDING;
            surface.draw_text(
                &format_tick_label(i, y_step.exponent),
                text_color,
                Point::new(p.x + PADDING, p.y),
                y_label_options,
                Some(&above_bottom),
            )?;
        }
        let Some(next) = i.checked_sub(1) else { break };
        i = next;
    }

    debug!(
        "axes: origin {origin:?}, x step 1E{}, y step 1E{}",
        x_step.exponent, y_step.exponent
    );
    Ok(AxisLayout { origin, x_step, y_step, x_label_rect, y_label_rect })
}

/// Ends a tick walk once a tick lands on the previous tick's pixel or more
/// ticks were placed than the axis has pixels.
struct TickWalk {
    last: Option<i32>,
    remaining: i32,
}

impl TickWalk {
    fn new(axis_len_px: i32) -> Self {
        Self { last: None, remaining: axis_len_px.saturating_add(2) }
    }

    fn advance(&mut self, pixel: i32) -> bool {
        if self.remaining <= 0 || self.last == Some(pixel) {
            return false;
        }
        self.remaining -= 1;
        self.last = Some(pixel);
        true
    }
}

/// First positive tick index, skipping ticks well left of (or below) `min`. One
/// tick beyond the edge is kept so a label straddling it still gets drawn; the
/// index keeps its label parity.
fn first_index_above(min: f64, step: f64) -> i64 {
    let first_visible = ((min / step).floor() as i64).saturating_sub(1);
    first_visible.max(1)
}

/// First negative tick index, skipping ticks right of (or above) `max`.
fn first_index_below(max: f64, step: f64) -> i64 {
    let first_visible = ((max / step).ceil() as i64).saturating_add(1);
    first_visible.min(-1)
}
