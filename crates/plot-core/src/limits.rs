// File: crates/plot-core/src/limits.rs
// Summary: AxisLimits value type (data-space bounding box) and its union operator.

use crate::error::{PlotError, Result};

/// Immutable data-space bounding box. `x_min <= x_max` and `y_min <= y_max` always hold;
/// equality is exact field-wise comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl AxisLimits {
    /// Fails on reversed bounds. NaN bounds are rejected as well since they
    /// compare as neither ordered nor equal.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        if !(x_min <= x_max) {
            return Err(PlotError::InvalidLimits(
                "x bounds must either span a range or be the same value",
            ));
        }
        if !(y_min <= y_max) {
            return Err(PlotError::InvalidLimits(
                "y bounds must either span a range or be the same value",
            ));
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }

    pub fn width(&self) -> f64 { self.x_max - self.x_min }
    pub fn height(&self) -> f64 { self.y_max - self.y_min }

    /// True when either axis has zero extent; nothing can be mapped onto such limits.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Component-wise union. Fails on an empty collection.
    pub fn fit<I>(limits: I) -> Result<Self>
    where
        I: IntoIterator<Item = AxisLimits>,
    {
        let mut iter = limits.into_iter();
        let first = iter.next().ok_or(PlotError::EmptyFit)?;
        Ok(iter.fold(first, |acc, l| Self {
            x_min: acc.x_min.min(l.x_min),
            x_max: acc.x_max.max(l.x_max),
            y_min: acc.y_min.min(l.y_min),
            y_max: acc.y_max.max(l.y_max),
        }))
    }

    /// Min/max reduction over paired samples; `None` for empty input. Any NaN or
    /// infinite sample fails the whole set.
    pub(crate) fn from_samples(xs: &[f64], ys: &[f64]) -> Option<Result<Self>> {
        if xs.is_empty() || ys.is_empty() {
            return None;
        }
        if !xs.iter().chain(ys).all(|v| v.is_finite()) {
            return Some(Err(PlotError::InvalidLimits("samples must be finite")));
        }
        let (x_min, x_max) = min_max(xs);
        let (y_min, y_max) = min_max(ys);
        Some(Self::new(x_min, x_max, y_min, y_max))
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .skip(1)
        .fold((values[0], values[0]), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_reduction() {
        let l = AxisLimits::from_samples(&[0.0, 2.0, 1.0], &[0.0, 1.0, 0.0])
            .expect("non-empty")
            .expect("valid");
        assert_eq!(l, AxisLimits::new(0.0, 2.0, 0.0, 1.0).unwrap());
        assert!(AxisLimits::from_samples(&[], &[]).is_none());
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        for (xs, ys) in [
            (vec![1.0, f64::NAN], vec![0.0, 1.0]),
            (vec![f64::NAN, 1.0], vec![0.0, 1.0]),
            (vec![0.0, 1.0], vec![2.0, f64::INFINITY]),
        ] {
            assert!(matches!(
                AxisLimits::from_samples(&xs, &ys),
                Some(Err(PlotError::InvalidLimits(_)))
            ));
        }
    }

    #[test]
    fn degenerate_detection() {
        assert!(AxisLimits::new(1.0, 1.0, 0.0, 5.0).unwrap().is_degenerate());
        assert!(AxisLimits::new(0.0, 1.0, 3.0, 3.0).unwrap().is_degenerate());
        assert!(!AxisLimits::new(0.0, 1.0, 0.0, 1.0).unwrap().is_degenerate());
    }
}
