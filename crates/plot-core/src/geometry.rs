// File: crates/plot-core/src/geometry.rs
// Summary: Pixel-space points and rectangles, bounds accumulation, cardinal spline segments.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle. Zero-size rectangles are valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Square of side `size` centered on `midpoint` (integer halving, as markers are drawn).
    pub const fn centered(midpoint: Point, size: i32) -> Self {
        Self::from_ltwh(midpoint.x.saturating_sub(size / 2), midpoint.y.saturating_sub(size / 2), size, size)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_ltrb(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Vertical overlap, treating edges that touch as non-overlapping.
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// Axis-aligned bounds of a point set; `None` when empty.
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        let (first, rest) = points.split_first()?;
        let mut r = Rect::from_ltrb(first.x, first.y, first.x, first.y);
        for p in rest {
            r.left = r.left.min(p.x);
            r.top = r.top.min(p.y);
            r.right = r.right.max(p.x);
            r.bottom = r.bottom.max(p.y);
        }
        Some(r)
    }
}

/// Running union of touched rectangles.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bounds(Option<Rect>);

impl Bounds {
    pub fn include(&mut self, rect: Rect) {
        self.0 = Some(match self.0 {
            Some(r) => r.union(&rect),
            None => rect,
        });
    }
    pub fn get(&self) -> Option<Rect> { self.0 }
}

/// One cubic Bezier piece of a cardinal spline, in float pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: (f32, f32),
    pub ctrl1: (f32, f32),
    pub ctrl2: (f32, f32),
    pub to: (f32, f32),
}

/// Convert a cardinal spline through `points` into cubic segments.
///
/// Tangent at `p[i]` is `tension * (p[i+1] - p[i-1]) / 2`, with the end points
/// duplicated, which puts the Bezier controls a third of that from each knot.
pub fn cardinal_segments(points: &[Point], tension: f32) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let n = points.len();
    let at = |i: isize| {
        let p = points[i.clamp(0, n as isize - 1) as usize];
        (p.x as f32, p.y as f32)
    };
    let k = tension / 3.0;
    (0..n as isize - 1)
        .map(|i| {
            let p0 = at(i - 1);
            let p1 = at(i);
            let p2 = at(i + 1);
            let p3 = at(i + 2);
            CubicSegment {
                from: p1,
                ctrl1: (p1.0 + k * (p2.0 - p0.0), p1.1 + k * (p2.1 - p0.1)),
                ctrl2: (p2.0 - k * (p3.0 - p1.0), p2.1 - k * (p3.1 - p1.1)),
                to: p2,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_covers_all_points() {
        let pts = [Point::new(3, 9), Point::new(-2, 4), Point::new(7, 1)];
        assert_eq!(Rect::bounding(&pts), Some(Rect::from_ltrb(-2, 1, 7, 9)));
        assert_eq!(Rect::bounding(&[]), None);
    }

    #[test]
    fn centered_marker_rect() {
        let r = Rect::centered(Point::new(10, 10), 5);
        assert_eq!(r, Rect::from_ltwh(8, 8, 5, 5));
    }

    #[test]
    fn rect_extent_saturates() {
        let r = Rect::centered(Point::new(i32::MAX, i32::MIN), 5);
        assert_eq!(r.right, i32::MAX);
        assert_eq!(r.top, i32::MIN);
        assert_eq!(r.bottom, i32::MIN + 5);
    }

    #[test]
    fn zero_tension_spline_is_straight() {
        let pts = [Point::new(0, 0), Point::new(10, 0), Point::new(20, 10)];
        let segs = cardinal_segments(&pts, 0.0);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].ctrl1, (0.0, 0.0));
        assert_eq!(segs[0].ctrl2, (10.0, 0.0));
        assert_eq!(segs[1].to, (20.0, 10.0));
    }

    #[test]
    fn spline_passes_through_knots() {
        let pts = [Point::new(0, 100), Point::new(50, 0), Point::new(100, 100)];
        let segs = cardinal_segments(&pts, 0.5);
        assert_eq!(segs[0].from, (0.0, 100.0));
        assert_eq!(segs[0].to, (50.0, 0.0));
        assert_eq!(segs[1].from, (50.0, 0.0));
        // Horizontal tangent at the apex: both neighbours share y.
        assert_eq!(segs[0].ctrl2.1, 0.0);
    }
}
