use std::f64::consts::PI;

use poster_core::color::Color;
use poster_core::models::chart::{Chart, ChartKind, DataPoint};
use poster_core::visual::{BlockKind, ChartFigure, Shape, VisualBlock};
use poster_layout::chart::{NO_DATA, VISUAL_UNAVAILABLE, effective_max, format_value, pie_palette};
use poster_layout::constants::{BAR_PADDING, CHART_CANVAS, SERIES_PADDING};
use poster_layout::render_chart;
use poster_themes::{default_theme, get_theme, list_themes};

fn chart(kind: ChartKind, points: &[(&str, f64)]) -> Chart {
    Chart {
        kind,
        title: "Chart".to_string(),
        x_axis_label: "X".to_string(),
        y_axis_label: "Y".to_string(),
        data: points.iter().map(|(l, v)| DataPoint::new(*l, *v)).collect(),
        svg_content: None,
    }
}

fn figure(block: &VisualBlock) -> &ChartFigure {
    match &block.kind {
        BlockKind::ChartBlock(figure) => figure,
        other => panic!("expected a chart block, got {other:?}"),
    }
}

fn placeholder_text(block: &VisualBlock) -> Option<&str> {
    match &block.kind {
        BlockKind::Placeholder { lines } => lines.first().map(|l| l.text.as_str()),
        _ => None,
    }
}

#[test]
fn empty_data_is_a_placeholder_for_every_theme_and_kind() {
    for theme in list_themes() {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Pie] {
            let block = render_chart(&chart(kind, &[]), theme);
            assert_eq!(placeholder_text(&block), Some(NO_DATA), "{kind:?} / {}", theme.id);
        }
    }
}

#[test]
fn effective_max_has_headroom_and_fallback() {
    let data = [DataPoint::new("a", 20.0), DataPoint::new("b", 5.0)];
    assert!((effective_max(&data) - 22.0).abs() < 1e-9);
    assert_eq!(effective_max(&[]), 100.0);
    assert_eq!(effective_max(&[DataPoint::new("z", 0.0)]), 100.0);
    assert_eq!(effective_max(&[DataPoint::new("n", -4.0)]), 100.0);
}

#[test]
fn bar_heights_follow_values() {
    let block = render_chart(
        &chart(ChartKind::Bar, &[("A", 10.0), ("B", 20.0), ("C", 15.0)]),
        default_theme(),
    );
    let fig = figure(&block);
    assert_eq!(fig.padding, BAR_PADDING);
    assert!((fig.effective_max.unwrap() - 22.0).abs() < 1e-9);

    let heights: Vec<f64> = fig.bars().map(|r| r.h).collect();
    assert_eq!(heights.len(), 3);
    let plot = fig.plot_height();
    assert_eq!(plot, 340.0);
    assert!((heights[1] - plot * 20.0 / 22.0).abs() < 1e-9);
    assert!((heights[0] / heights[1] - 0.5).abs() < 1e-9);
    assert!((heights[2] / heights[1] - 0.75).abs() < 1e-9);

    for bar in fig.bars() {
        assert!((bar.bottom() - (BAR_PADDING.top + plot)).abs() < 1e-9);
    }
}

#[test]
fn bar_slots_split_sixty_forty() {
    let block = render_chart(&chart(ChartKind::Bar, &[("A", 1.0), ("B", 2.0)]), default_theme());
    let bars: Vec<_> = figure(&block).bars().copied().collect();
    let slot = (CHART_CANVAS.width - BAR_PADDING.left - BAR_PADDING.right) / 2.0;
    assert!((bars[0].w - slot * 0.6).abs() < 1e-9);
    assert!((bars[0].x - (BAR_PADDING.left + slot * 0.2)).abs() < 1e-9);
    assert!((bars[1].x - bars[0].x - slot).abs() < 1e-9);
}

#[test]
fn negative_bars_hang_below_the_axis() {
    let block = render_chart(&chart(ChartKind::Bar, &[("A", 10.0), ("B", -5.0)]), default_theme());
    let fig = figure(&block);
    let axis = BAR_PADDING.top + fig.plot_height();
    let bars: Vec<_> = fig.bars().copied().collect();
    assert!((bars[1].y - axis).abs() < 1e-9);
    assert!(bars[1].h > 0.0);
}

#[test]
fn grid_ticks_are_rounded_fractions_of_max() {
    let block = render_chart(
        &chart(
            ChartKind::Bar,
            &[("Control", 15.0), ("Variable A", 45.0), ("Variable B", 32.0), ("Variable C", 88.0)],
        ),
        default_theme(),
    );
    let labels: Vec<&str> = figure(&block).labels().collect();
    for tick in ["0", "24", "48", "73", "97"] {
        assert!(labels.contains(&tick), "missing tick {tick} in {labels:?}");
    }
    assert!(labels.contains(&"88"));
    assert!(labels.contains(&"Variable C"));
}

#[test]
fn single_point_line_starts_at_the_left_edge() {
    let block = render_chart(&chart(ChartKind::Line, &[("Only", 7.0)]), default_theme());
    let fig = figure(&block);
    assert_eq!(fig.padding, SERIES_PADDING);

    let circle = fig
        .elements
        .iter()
        .find_map(|s| match s {
            Shape::Circle { cx, cy, .. } => Some((*cx, *cy)),
            _ => None,
        })
        .unwrap();
    assert_eq!(circle.0, SERIES_PADDING.left);
    assert!(circle.1.is_finite());
}

#[test]
fn line_points_are_evenly_spaced() {
    let block = render_chart(
        &chart(ChartKind::Line, &[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
        default_theme(),
    );
    let points = figure(&block)
        .elements
        .iter()
        .find_map(|s| match s {
            Shape::Polyline { points, .. } => Some(points.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].0, 100.0);
    assert_eq!(points[1].0, 430.0);
    assert_eq!(points[2].0, 760.0);
}

#[test]
fn zero_total_pie_is_a_placeholder() {
    let block = render_chart(&chart(ChartKind::Pie, &[("a", 0.0), ("b", 0.0)]), default_theme());
    assert_eq!(placeholder_text(&block), Some(NO_DATA));
}

#[test]
fn overflowing_scale_is_a_placeholder() {
    for kind in [ChartKind::Bar, ChartKind::Line] {
        let block = render_chart(&chart(kind, &[("A", f64::MAX), ("B", 1.0)]), default_theme());
        assert_eq!(placeholder_text(&block), Some(NO_DATA));
    }
    let pie = render_chart(
        &chart(ChartKind::Pie, &[("A", f64::MAX), ("B", f64::MAX)]),
        default_theme(),
    );
    assert_eq!(placeholder_text(&pie), Some(NO_DATA));
}

#[test]
fn negative_pie_is_a_placeholder() {
    let block = render_chart(&chart(ChartKind::Pie, &[("a", 5.0), ("b", -1.0)]), default_theme());
    assert_eq!(placeholder_text(&block), Some(NO_DATA));
}

#[test]
fn pie_slices_cover_the_circle_and_cycle_colors() {
    let theme = get_theme("ocean").unwrap();
    let points: Vec<(&str, f64)> = vec![
        ("a", 1.0),
        ("b", 1.0),
        ("c", 1.0),
        ("d", 1.0),
        ("e", 1.0),
        ("f", 1.0),
    ];
    let block = render_chart(&chart(ChartKind::Pie, &points), theme);
    let fig = figure(&block);

    let total: f64 = fig.wedges().filter_map(Shape::sweep).sum();
    assert!((total - 2.0 * PI).abs() < 1e-9);

    let fills: Vec<Color> = fig
        .wedges()
        .filter_map(|s| match s {
            Shape::Wedge { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    let palette = pie_palette(theme);
    assert_eq!(fills[0], theme.colors.accent);
    assert_eq!(fills[4], palette[4]);
    assert_eq!(fills[5], fills[0]);

    let labels: Vec<&str> = fig.labels().collect();
    assert!(labels.contains(&"17%"));
    assert!(labels.contains(&"a (1)"));
}

#[test]
fn pie_first_slice_starts_at_zero() {
    let block = render_chart(&chart(ChartKind::Pie, &[("a", 3.0), ("b", 1.0)]), default_theme());
    match figure(&block).wedges().next().unwrap() {
        Shape::Wedge { start, end, .. } => {
            assert_eq!(*start, 0.0);
            assert!((end - 1.5 * PI).abs() < 1e-9);
        }
        _ => unreachable!(),
    }
}

#[test]
fn generic_visual_is_sanitized_before_embedding() {
    let mut c = chart(ChartKind::Generic, &[]);
    c.svg_content = Some("<svg><circle r=\"4\" onclick=\"x()\"/></svg>".to_string());
    let block = render_chart(&c, default_theme());
    let fig = figure(&block);
    match &fig.elements[0] {
        Shape::Markup { markup } => {
            assert!(markup.as_str().contains("<circle r=\"4\"/>"));
            assert!(!markup.as_str().contains("onclick"));
        }
        other => panic!("expected markup, got {other:?}"),
    }
}

#[test]
fn rejected_generic_visual_degrades_to_placeholder() {
    let mut c = chart(ChartKind::Generic, &[]);
    c.svg_content = Some("<svg><script>steal()</script></svg>".to_string());
    let block = render_chart(&c, default_theme());
    assert_eq!(placeholder_text(&block), Some(VISUAL_UNAVAILABLE));
}

#[test]
fn value_formatting_drops_trailing_zeroes() {
    assert_eq!(format_value(15.0), "15");
    assert_eq!(format_value(0.5), "0.5");
    assert_eq!(format_value(-3.25), "-3.25");
}

#[test]
fn bar_title_is_larger_than_series_title() {
    let bar = render_chart(&chart(ChartKind::Bar, &[("a", 1.0)]), default_theme());
    let line = render_chart(&chart(ChartKind::Line, &[("a", 1.0)]), default_theme());
    assert_eq!(figure(&bar).title.style.size, 32.0);
    assert_eq!(figure(&line).title.style.size, 28.0);
}
