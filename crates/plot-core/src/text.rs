// File: crates/plot-core/src/text.rs
// Summary: Backend-independent text layout: anchors, style flags, ellipsis truncation.

use crate::error::Result;
use crate::geometry::{Point, Rect};

pub const ELLIPSIS: &str = "...";

/// Which point of the text box the anchor coordinate refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

impl TextStyle {
    pub const NONE: TextStyle = TextStyle { bold: false, italic: false, underline: false, strikeout: false };
    pub const BOLD: TextStyle = TextStyle { bold: true, ..TextStyle::NONE };
    pub const ITALIC: TextStyle = TextStyle { italic: true, ..TextStyle::NONE };
}

/// Layout parameters for one `draw_text` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextOptions {
    pub anchor: TextAnchor,
    /// Multiplier on the surface's base font size.
    pub size: f32,
    pub style: TextStyle,
    /// Truncate with a trailing ellipsis until the measured width fits.
    pub max_width: Option<i32>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self { anchor: TextAnchor::TopLeft, size: 1.0, style: TextStyle::NONE, max_width: None }
    }
}

impl TextOptions {
    pub fn anchored(anchor: TextAnchor) -> Self {
        Self { anchor, ..Self::default() }
    }
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
    pub fn with_max_width(mut self, max_width: i32) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Measured extent of a laid-out string, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Shorten `text` to fit `max_width`, keeping the longest prefix that still fits
/// with [`ELLIPSIS`] appended (widths are ceiled). Returns the ellipsis alone when
/// not even a single character fits.
///
/// The cut point is binary-searched, assuming widths grow with the prefix length.
pub fn fit_to_width<F>(text: &str, max_width: i32, mut measure: F) -> Result<String>
where
    F: FnMut(&str) -> Result<f32>,
{
    let limit = max_width as f32;
    if measure(text)?.ceil() <= limit {
        return Ok(text.to_string());
    }
    let chars: Vec<char> = text.chars().collect();
    let candidate = |keep: usize| chars[..keep].iter().collect::<String>() + ELLIPSIS;

    // `lo` chars always fit (zero by convention), `hi` is the largest count left to try.
    let (mut lo, mut hi) = (0, chars.len().saturating_sub(1));
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if measure(&candidate(mid))?.ceil() <= limit {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(candidate(lo))
}

/// Top-left corner of a `size` text box anchored at `point`.
pub fn anchor_origin(point: Point, anchor: TextAnchor, size: TextSize) -> (f32, f32) {
    use TextAnchor::*;
    let mut x = point.x as f32;
    let mut y = point.y as f32;
    match anchor {
        TopCenter | Center | BottomCenter => x -= size.width / 2.0,
        TopRight | CenterRight | BottomRight => x -= size.width,
        TopLeft | CenterLeft | BottomLeft => {}
    }
    match anchor {
        CenterLeft | Center | CenterRight => y -= size.height / 2.0,
        BottomLeft | BottomCenter | BottomRight => y -= size.height,
        TopLeft | TopCenter | TopRight => {}
    }
    (x, y)
}

/// Integer rectangle enclosing a float text box (floor origin, ceil extent).
pub fn text_rect(origin: (f32, f32), size: TextSize) -> Rect {
    let left = origin.0.floor() as i32;
    let top = origin.1.floor() as i32;
    let right = (origin.0 + size.width).ceil() as i32;
    let bottom = (origin.1 + size.height).ceil() as i32;
    Rect::from_ltrb(left, top, right, bottom)
}
