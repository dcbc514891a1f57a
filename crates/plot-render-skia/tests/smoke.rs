// File: crates/plot-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{Color, Marker, Plotter, RenderOptions};
use plot_render_skia::{render_to_png, render_to_png_bytes};

fn demo_plotter() -> Plotter {
    let mut plotter = Plotter::new();
    plotter.set_title(Some("Smoke")).set_x_label(Some("x")).set_y_label(Some("y"));
    plotter
        .plot_function(|x| x * x, -2.0, 2.0, None)
        .expect("function plot")
        .set_name(Some("x^2"));
    plotter
        .plot_scatter(&[-1.0, 0.0, 1.0], &[0.5, 1.5, 2.5])
        .expect("scatter plot")
        .set_marker(Marker::Cross)
        .set_color(Some(Color::CRIMSON))
        .set_name(Some("points"));
    plotter
}

#[test]
fn render_smoke_png() {
    let plotter = demo_plotter();
    let opts = RenderOptions::new(320, 240, 1.0).expect("options");
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    render_to_png(&plotter, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&plotter, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (320, 240));
}

#[test]
fn empty_session_fails_to_render() {
    let plotter = Plotter::new();
    let opts = RenderOptions::new(64, 64, 1.0).expect("options");
    let err = render_to_png_bytes(&plotter, &opts).unwrap_err();
    assert!(err.to_string().contains("empty"), "{err}");
}
