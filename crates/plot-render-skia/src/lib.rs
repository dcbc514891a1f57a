// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for plot-core; renders a plotter session to RGBA8 or PNG.

pub mod raster;
pub mod surface;
pub mod text;

use std::path::Path;

use anyhow::Result;
use log::info;
use plot_core::{Plotter, RenderOptions};

pub use raster::Raster;
pub use surface::{SkiaSurface, SkiaSurfaceFactory};
pub use text::{TextShaper, BASE_FONT_SIZE};

/// Render `plotter` onto a fresh raster and return the pixels.
pub fn render_to_raster(plotter: &Plotter, opts: &RenderOptions) -> Result<Raster> {
    Ok(plotter.render(&SkiaSurfaceFactory::default(), opts)?)
}

/// Render `plotter` and encode the result as PNG bytes.
pub fn render_to_png_bytes(plotter: &Plotter, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_to_raster(plotter, opts)?.to_png_bytes()
}

/// Render `plotter` to a PNG file at `output_png_path`.
pub fn render_to_png(plotter: &Plotter, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    render_to_raster(plotter, opts)?.save_png(path)?;
    info!("wrote {}x{} plot to {}", opts.width, opts.height, path.display());
    Ok(())
}
