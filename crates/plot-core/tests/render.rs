// File: crates/plot-core/tests/render.rs
// Purpose: End-to-end render passes against a recording surface.

mod common;

use common::{Op, RecordingSurface};
use plot_core::mapper::PIXEL_LIMIT;
use plot_core::{AxisLimits, Color, LineStyle, Marker, PlotError, Plotter, Point, Rect, TextAnchor};

#[test]
fn line_plot_maps_samples_onto_surface() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(0.0, 2.0, 0.0, 1.0).expect("limits")));
    let plot = plotter.plot_line(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).expect("plot");
    plot.set_color(Some(Color::RED));
    assert_eq!(plot.axis_limits(), Some(AxisLimits::new(0.0, 2.0, 0.0, 1.0).unwrap()));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    let surface = ctx.surface();
    assert_eq!(
        surface.ops_in(Color::RED),
        vec![&Op::Polyline {
            color: Color::RED,
            points: vec![Point::new(0, 100), Point::new(50, 0), Point::new(100, 100)],
        }]
    );
    assert_eq!(ctx.plot_bounds(), &[Some(Rect::from_ltrb(0, 0, 100, 100))]);
}

#[test]
fn surface_is_cleared_first() {
    let mut plotter = Plotter::new();
    plotter.plot_line(&[0.0, 1.0], &[0.0, 1.0]).expect("plot");
    plotter.clear_with(Color::BEIGE).expect("clear");
    plotter.plot_line(&[-1.0, 1.0], &[-1.0, 1.0]).expect("plot");

    let ctx = plotter.execute(RecordingSurface::new(200, 100)).expect("render");
    assert_eq!(ctx.surface().ops.first(), Some(&Op::Clear(Color::BEIGE)));
    assert_eq!(ctx.plot_bounds().len(), 1);
}

#[test]
fn degenerate_limits_draw_nothing() {
    let mut plotter = Plotter::new();
    plotter.set_title(Some("never drawn"));
    plotter.plot_line(&[1.0, 1.0], &[2.0, 5.0]).expect("plot");

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    assert!(ctx.is_degenerate());
    assert_eq!(ctx.surface().ops, vec![Op::Clear(Color::WHITE)]);
    assert!(ctx.plot_bounds().is_empty());
    assert!(ctx.axis_layout().is_none());

    // Same outcome through an explicit override.
    plotter.set_axis_limits(Some(AxisLimits::new(3.0, 3.0, 0.0, 1.0).expect("limits")));
    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    assert_eq!(ctx.surface().ops, vec![Op::Clear(Color::WHITE)]);
}

#[test]
fn scatter_without_marker_is_invisible() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(-1.0, 1.0, -1.0, 1.0).expect("limits")));
    plotter
        .plot_scatter(&[0.5, -0.5], &[0.5, -0.5])
        .expect("plot")
        .set_color(Some(Color::GREEN))
        .set_name(Some("hidden"));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    assert!(ctx.surface().ops_in(Color::GREEN).is_empty());
    assert!(ctx.legend().rows().is_empty());
    assert!(!ctx.surface().texts().iter().any(|(t, _)| *t == "hidden"));
    assert_eq!(ctx.plot_bounds(), &[None]);
}

#[test]
fn scatter_markers_are_drawn_per_sample() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(0.0, 10.0, 0.0, 10.0).expect("limits")));
    plotter
        .plot_scatter(&[2.0f32, 4.0, 6.0], &[2.0f32, 4.0, 6.0])
        .expect("plot")
        .set_marker(Marker::Circle)
        .set_color(Some(Color::NAVY));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    let ellipses: Vec<Rect> = ctx
        .surface()
        .ops_in(Color::NAVY)
        .into_iter()
        .filter_map(|op| match op {
            Op::Ellipse { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(
        ellipses,
        vec![
            Rect::centered(Point::new(20, 80), 5),
            Rect::centered(Point::new(40, 60), 5),
            Rect::centered(Point::new(60, 40), 5),
        ]
    );
    assert_eq!(ctx.plot_bounds(), &[Some(Rect::from_ltrb(18, 38, 63, 83))]);
}

#[test]
fn smoothed_style_needs_three_points() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(0.0, 4.0, 0.0, 4.0).expect("limits")));
    plotter
        .plot_line(&[0.0, 1.0], &[0.0, 1.0])
        .expect("plot")
        .set_line_style(LineStyle::Smoothed)
        .set_color(Some(Color::RED));
    plotter
        .plot_line(&[0.0, 1.0, 2.0], &[0.0, 2.0, 0.0])
        .expect("plot")
        .set_line_style(LineStyle::Smoothed)
        .set_color(Some(Color::BLUE));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    let surface = ctx.surface();
    assert!(matches!(surface.ops_in(Color::RED)[..], [Op::Polyline { .. }]));
    match &surface.ops_in(Color::BLUE)[..] {
        [Op::Curve { points, tension, .. }] => {
            assert_eq!(points.len(), 3);
            assert_eq!(*tension, 0.5);
        }
        other => panic!("expected one curve, got {other:?}"),
    }
}

#[test]
fn function_plot_never_draws_markers() {
    let mut plotter = Plotter::new();
    plotter
        .plot_function(|x| x.sin(), -3.0, 3.0, None)
        .expect("plot")
        .set_color(Some(Color::ORANGE));

    let ctx = plotter.execute(RecordingSurface::new(300, 200)).expect("render");
    let ops = ctx.surface().ops_in(Color::ORANGE);
    assert_eq!(ops.len(), 1);
    match ops[0] {
        Op::Polyline { points, .. } => assert_eq!(points.len(), 101),
        other => panic!("expected polyline, got {other:?}"),
    }
}

#[test]
fn unattributed_plots_get_distinct_colors() {
    let mut plotter = Plotter::new();
    plotter.plot_line(&[0.0, 1.0], &[0.0, 1.0]).expect("plot");
    plotter.plot_line(&[0.0, 1.0], &[1.0, 0.0]).expect("plot");

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    let colors: Vec<Color> = ctx
        .surface()
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Polyline { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 2);
    assert_ne!(colors[0], colors[1]);
    for c in &colors {
        assert_ne!(*c, Color::WHITE);
        assert_ne!(*c, Color::DARK_GRAY);
    }
}

#[test]
fn explicit_colors_are_kept_out_of_allocation() {
    let mut plotter = Plotter::new();
    plotter.plot_line(&[0.0, 1.0], &[0.0, 1.0]).expect("plot");
    plotter
        .plot_line(&[0.0, 1.0], &[1.0, 0.0])
        .expect("plot")
        .set_color(Some(Color::BLACK));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    assert!(ctx.allocator().allocated().any(|c| c == Color::BLACK));
    let first = match &ctx.surface().ops_in(Color::BLACK)[..] {
        [Op::Polyline { points, .. }] => points.clone(),
        other => panic!("expected one black polyline, got {other:?}"),
    };
    assert_eq!(first, vec![Point::new(0, 0), Point::new(100, 100)]);
}

#[test]
fn title_is_drawn_last_at_top_left() {
    let mut plotter = Plotter::new();
    plotter.set_title(Some("Demo")).set_text_color(Some(Color::TEAL));
    plotter.plot_line(&[-1.0, 1.0], &[-1.0, 1.0]).expect("plot");

    let ctx = plotter.execute(RecordingSurface::new(400, 300)).expect("render");
    match ctx.surface().ops.last() {
        Some(Op::Text { text, color, rect, options, drawn }) => {
            assert_eq!(text, "Demo");
            assert_eq!(*color, Color::TEAL);
            assert_eq!(options.anchor, TextAnchor::TopLeft);
            assert_eq!(options.size, 2.0);
            assert_eq!(options.max_width, Some(100));
            assert_eq!((rect.left, rect.top), (5, 5));
            assert!(*drawn);
        }
        other => panic!("expected title text, got {other:?}"),
    }
}

#[test]
fn blank_title_is_skipped() {
    let mut plotter = Plotter::new();
    plotter.set_title(Some("   "));
    plotter.plot_line(&[-1.0, 1.0], &[-1.0, 1.0]).expect("plot");

    let ctx = plotter.execute(RecordingSurface::new(400, 300)).expect("render");
    assert!(!ctx.surface().texts().iter().any(|(t, _)| t.trim().is_empty()));
}

#[test]
fn empty_session_cannot_fit_limits() {
    let plotter = Plotter::new();
    let err = plotter.execute(RecordingSurface::new(100, 100)).unwrap_err();
    assert_eq!(err, PlotError::EmptyFit);
}

#[test]
fn disposed_session_cannot_render() {
    let mut plotter = Plotter::new();
    plotter.plot_line(&[0.0, 1.0], &[0.0, 1.0]).expect("plot");
    plotter.dispose().expect("dispose");
    let err = plotter.execute(RecordingSurface::new(100, 100)).unwrap_err();
    assert_eq!(err, PlotError::Disposed("plotter"));
}

#[test]
fn context_inverts_pixels() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(-10.0, 10.0, 0.0, 100.0).expect("limits")));
    let ctx = plotter.execute(RecordingSurface::new(200, 100)).expect("render");
    assert_eq!(ctx.pixel_from_location(0.0, 50.0), Some(Point::new(100, 50)));
    let (x, y) = ctx.location_from_pixel(Point::new(150, 25)).expect("mapper");
    assert!((x - 5.0).abs() < 1e-9 && (y - 75.0).abs() < 1e-9);
}

#[test]
fn samples_far_outside_limits_are_clamped() {
    let mut plotter = Plotter::new();
    plotter.set_axis_limits(Some(AxisLimits::new(0.0, 1.0, 0.0, 1.0).expect("limits")));
    plotter
        .plot_line(&[0.5, 0.6], &[0.5, -1e12])
        .expect("plot")
        .set_color(Some(Color::RED));
    plotter
        .plot_scatter(&[1e12, -1e300], &[-1e12, 1e300])
        .expect("plot")
        .set_marker(Marker::Cross)
        .set_color(Some(Color::BLUE));

    let ctx = plotter.execute(RecordingSurface::new(100, 100)).expect("render");
    assert_eq!(
        ctx.surface().ops_in(Color::RED),
        vec![&Op::Polyline { color: Color::RED, points: vec![Point::new(50, 50), Point::new(60, PIXEL_LIMIT)] }]
    );
    let bounds = ctx.plot_bounds()[1].expect("markers drawn");
    assert_eq!((bounds.left, bounds.top), (-PIXEL_LIMIT - 2, -PIXEL_LIMIT - 2));
    assert_eq!((bounds.right, bounds.bottom), (PIXEL_LIMIT + 3, PIXEL_LIMIT + 3));
}

#[test]
fn oversampled_function_is_rejected_by_the_session() {
    let mut plotter = Plotter::new();
    let err = plotter.plot_function(|x| x, 0.0, 1.0, Some(1e-300)).unwrap_err();
    assert!(matches!(err, PlotError::InvalidArgument(_)));
    assert_eq!(plotter.plot_count(), 0);
}

#[test]
fn non_finite_samples_are_rejected_by_the_session() {
    let mut plotter = Plotter::new();
    let err = plotter.plot_line(&[0.0, 1.0], &[1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, PlotError::InvalidLimits(_)));
    assert_eq!(plotter.plot_count(), 0);
}
