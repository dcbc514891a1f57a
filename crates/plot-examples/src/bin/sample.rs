// File: crates/plot-examples/src/bin/sample.rs
// Summary: Sample session with function, sampled and scatter plots rendered to PNG.

use anyhow::Result;
use plot_core::{Color, LineStyle, Marker, Plotter, RenderOptions};

fn function1(x: f64) -> f64 {
    x.powi(3) - 5.0 * x + 1.22
}

fn function2(x: f64) -> f64 {
    5.0 * x + (std::f64::consts::PI * x - 0.22).sin()
}

fn function3(x: f64) -> f64 {
    (2.0 * std::f64::consts::PI * x).cos() + 3.5
}

/// Parabola with deterministic jitter in `[0, 20)`.
fn function4(x: f64, i: usize) -> f64 {
    let jitter = ((i as f64 * 12.9898).sin() * 43758.5453).fract().abs() * 20.0;
    7.0 * x * x + 3.0 * x - 3.5 + jitter
}

fn sampled(start: f64, end: f64, step: f64, f: impl Fn(f64, usize) -> f64) -> (Vec<f64>, Vec<f64>) {
    let n = ((end - start) / step).round() as usize + 1;
    let xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    let ys = xs.iter().enumerate().map(|(i, &x)| f(x, i)).collect();
    (xs, ys)
}

fn main() -> Result<()> {
    let (xs3, ys3) = sampled(-6.0, 4.0, 0.5, |x, _| function3(x));
    let (xs4, ys4) = sampled(-7.0, 5.0, 0.1, function4);

    let mut plotter = Plotter::new();
    plotter
        .set_title(Some("My custom fancy plot"))
        .set_x_label(Some("x [sec]"))
        .set_y_label(Some("y[m]"));
    plotter.clear_with(Color::WHITE)?;

    plotter
        .plot_function(function1, -3.0, 3.0, Some(0.25))?
        .set_line_style(LineStyle::Smoothed)
        .set_name(Some("Function 1"));
    plotter.plot_function(function2, -6.0, 4.0, Some(0.025))?;
    plotter
        .plot_line(&xs3, &ys3)?
        .set_marker(Marker::Cross)
        .set_name(Some("Function3"));
    plotter
        .plot_scatter(&xs4, &ys4)?
        .set_marker(Marker::Circle)
        .set_name(Some(
            "Very very extra large function name that is to long to be displayed in the text rectangle.",
        ));

    let opts = RenderOptions::new(1024, 768, 1.0)?;
    let out = std::path::PathBuf::from("target/out/plot.png");
    plot_render_skia::render_to_png(&plotter, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
