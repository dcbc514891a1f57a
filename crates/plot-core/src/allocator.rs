// File: crates/plot-core/src/allocator.rs
// Summary: Per-surface color allocator maximizing worst-case contrast against colors in use.

use log::debug;

use crate::color::{contrast_ratio_of, Color};
use crate::error::{PlotError, Result};
use crate::palette;

/// Upper bound of the WCAG contrast ratio (black on white).
const MAX_CONTRAST: f64 = 21.0;

/// Picks series colors for one render pass.
///
/// Every pick is the palette entry whose minimum contrast ratio against all colors
/// already in use is largest; ties go to the earlier palette entry. The winner is
/// recorded as in use before it is returned.
#[derive(Clone, Debug)]
pub struct ColorAllocator {
    palette: Vec<(Color, f64)>,
    allocated: Vec<(Color, f64)>,
}

impl ColorAllocator {
    /// Allocator over the default named palette, seeded with `in_use`.
    pub fn new<I>(in_use: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        Self::build(palette::default_palette(), in_use)
    }

    /// Allocator over a caller-supplied candidate list. An empty palette is a
    /// configuration error.
    pub fn with_palette<I>(palette: Vec<Color>, in_use: I) -> Result<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        if palette.is_empty() {
            return Err(PlotError::EmptyPalette);
        }
        Ok(Self::build(palette, in_use))
    }

    fn build<I>(palette: Vec<Color>, in_use: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        let mut this = Self {
            palette: palette.into_iter().map(|c| (c, c.relative_luminance())).collect(),
            allocated: Vec::new(),
        };
        for c in in_use {
            this.reserve(c);
        }
        this
    }

    /// Mark `color` as in use without allocating it.
    pub fn reserve(&mut self, color: Color) {
        if !self.allocated.iter().any(|(c, _)| *c == color) {
            self.allocated.push((color, color.relative_luminance()));
        }
    }

    /// Colors currently in use, in the order they were first seen.
    pub fn allocated(&self) -> impl Iterator<Item = Color> + '_ {
        self.allocated.iter().map(|(c, _)| *c)
    }

    /// Worst-case contrast of `candidate` against everything in use
    /// (21 when nothing is in use yet).
    pub fn min_contrast(&self, candidate: Color) -> f64 {
        self.min_contrast_of(candidate.relative_luminance())
    }

    fn min_contrast_of(&self, luminance: f64) -> f64 {
        self.allocated
            .iter()
            .map(|&(_, l)| contrast_ratio_of(luminance, l))
            .fold(MAX_CONTRAST, f64::min)
    }

    pub fn allocate(&mut self) -> Color {
        let mut best: Option<(Color, f64)> = None;
        for &(candidate, luminance) in &self.palette {
            let worst = self.min_contrast_of(luminance);
            if best.map_or(true, |(_, score)| worst > score) {
                best = Some((candidate, worst));
            }
        }
        // Palette is non-empty by construction.
        let (color, score) = best.unwrap_or((self.palette[0].0, 1.0));
        debug!("allocated plot color {color} (min contrast {score:.3})");
        self.reserve(color);
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        let err = ColorAllocator::with_palette(Vec::new(), [Color::WHITE]).unwrap_err();
        assert_eq!(err, PlotError::EmptyPalette);
    }

    #[test]
    fn white_background_prefers_black() {
        let mut a = ColorAllocator::with_palette(
            vec![Color::YELLOW, Color::BLACK, Color::GRAY],
            [Color::WHITE],
        )
        .unwrap();
        assert_eq!(a.allocate(), Color::BLACK);
    }

    #[test]
    fn ties_go_to_palette_order() {
        let mut a = ColorAllocator::with_palette(vec![Color::AQUA, Color::CYAN], [Color::BLACK]).unwrap();
        assert_eq!(a.allocate(), Color::AQUA);
    }

    #[test]
    fn seeds_are_deduplicated() {
        let a = ColorAllocator::new([Color::WHITE, Color::WHITE, Color::DARK_GRAY]);
        assert_eq!(a.allocated().count(), 2);
    }
}
