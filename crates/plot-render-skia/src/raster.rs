// File: crates/plot-render-skia/src/raster.rs
// Summary: Finished RGBA8 raster read back from a Skia surface, with PNG encoding.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use plot_core::{Color, PlotError};
use skia_safe as skia;

/// Unpremultiplied RGBA8 pixels, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Raster {
    pub(crate) fn read_from(surface: &mut skia::Surface, width: i32, height: i32) -> plot_core::Result<Self> {
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(PlotError::Surface("failed to read back raster pixels".into()));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn stride(&self) -> usize { self.width as usize * 4 }
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Pixel at `(x, y)`, `None` outside the raster.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        let p = &self.pixels[i..i + 4];
        Some(Color::argb(p[3], p[0], p[1], p[2]))
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone())
            .context("raster buffer does not match its dimensions")?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Encode as PNG at `path`, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
