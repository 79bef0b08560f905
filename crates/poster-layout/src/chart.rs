//! Chart renderer: a [`Chart`] plus a [`Theme`] become a chart block on a
//! fixed 800×500 canvas.
//!
//! Never fails. Missing or degenerate data yields a placeholder block.

use std::f64::consts::PI;

use poster_core::color::Color;
use poster_core::models::chart::{Chart, ChartKind, DataPoint};
use poster_core::models::theme::Theme;
use poster_core::sanitize::sanitize_svg;
use poster_core::visual::{
    Anchor, BlockKind, BlockStyle, ChartFigure, FontWeight, Padding, Placement, Rect, Shape,
    ShapeRole, Stroke, TextAlign, TextRun, TextStyle, VisualBlock,
};
use tracing::warn;

use crate::constants::{
    BAR_FILL_RATIO, BAR_PADDING, BAR_TITLE_SIZE, CHART_CANVAS, FALLBACK_MAX, GRID_COLOR,
    GRID_TICKS, HEADROOM, LEGEND_ROW, PIE_LABEL_RADIUS, PIE_NEUTRALS, SERIES_PADDING,
    SERIES_TITLE_SIZE, TICK_COLOR,
};

pub const NO_DATA: &str = "No chart data";
pub const VISUAL_UNAVAILABLE: &str = "Visual unavailable";

/// Render `chart` with `theme`. Returns a [`BlockKind::ChartBlock`] or a
/// [`BlockKind::Placeholder`].
pub fn render_chart(chart: &Chart, theme: &Theme) -> VisualBlock {
    match chart.kind {
        ChartKind::Bar => series_chart(chart, theme, ChartKind::Bar),
        ChartKind::Line => series_chart(chart, theme, ChartKind::Line),
        ChartKind::Pie => pie_chart(chart, theme),
        ChartKind::Generic => generic_visual(chart, theme),
    }
}

/// `max(values) × 1.1`, or 100 when there is nothing positive to scale to.
pub fn effective_max(data: &[DataPoint]) -> f64 {
    let max = data
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        max * HEADROOM
    } else {
        FALLBACK_MAX
    }
}

/// Format a data value the way it is typed: `15`, `0.5`, `-3.25`.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Round half up, matching how tick labels are printed.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn placeholder(theme: &Theme, message: &str) -> VisualBlock {
    let style = TextStyle::new(theme.fonts.body, 30.0, Color::GRAY_400)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center);
    VisualBlock::new(
        BlockKind::Placeholder {
            lines: vec![TextRun::new(message, style)],
        },
        Placement::fill(),
    )
    .styled(BlockStyle::default().background(Color::GRAY_50))
}

fn figure_block(figure: ChartFigure) -> VisualBlock {
    VisualBlock::new(BlockKind::ChartBlock(figure), Placement::fill()).styled(
        BlockStyle::default()
            .background(Color::WHITE)
            .radius(2.0)
            .padding(16.0)
            .gap(16.0),
    )
}

fn title_run(chart: &Chart, theme: &Theme, size: f64) -> TextRun {
    TextRun::new(
        chart.title.clone(),
        TextStyle::new(theme.fonts.heading, size, theme.colors.primary)
            .weight(FontWeight::Bold)
            .align(TextAlign::Center),
    )
}

fn label(x: f64, y: f64, text: String, anchor: Anchor, style: TextStyle) -> Shape {
    Shape::Label {
        x,
        y,
        text,
        anchor,
        rotation: None,
        style,
    }
}

fn has_usable_data(data: &[DataPoint]) -> bool {
    !data.is_empty() && data.iter().all(|p| p.value.is_finite())
}

fn series_chart(chart: &Chart, theme: &Theme, kind: ChartKind) -> VisualBlock {
    if !has_usable_data(&chart.data) {
        return placeholder(theme, NO_DATA);
    }

    let (padding, title_size) = match kind {
        ChartKind::Bar => (BAR_PADDING, BAR_TITLE_SIZE),
        _ => (SERIES_PADDING, SERIES_TITLE_SIZE),
    };
    let max = effective_max(&chart.data);
    // Values near f64::MAX overflow the headroom.
    if !max.is_finite() {
        return placeholder(theme, NO_DATA);
    }

    let mut elements = grid(theme, padding, max);
    match kind {
        ChartKind::Bar => elements.extend(bars(&chart.data, theme, padding, max)),
        _ => elements.extend(line(&chart.data, theme, padding, max)),
    }
    elements.extend(axis_labels(chart, theme));

    figure_block(ChartFigure {
        kind,
        title: title_run(chart, theme, title_size),
        canvas: CHART_CANVAS,
        padding,
        effective_max: Some(max),
        elements,
    })
}

fn plot_size(padding: Padding) -> (f64, f64) {
    (
        CHART_CANVAS.width - padding.left - padding.right,
        CHART_CANVAS.height - padding.top - padding.bottom,
    )
}

fn grid(theme: &Theme, padding: Padding, max: f64) -> Vec<Shape> {
    let (_, ch) = plot_size(padding);
    let style = TextStyle::new(theme.fonts.body, 20.0, TICK_COLOR);

    GRID_TICKS
        .iter()
        .flat_map(|tick| {
            let y = padding.top + ch - tick * ch;
            [
                Shape::Line {
                    x1: padding.left,
                    y1: y,
                    x2: CHART_CANVAS.width - padding.right,
                    y2: y,
                    stroke: Stroke::new(GRID_COLOR, 2.0),
                },
                label(
                    padding.left - 15.0,
                    y + 8.0,
                    format_value(round_half_up(tick * max)),
                    Anchor::End,
                    style,
                ),
            ]
        })
        .collect()
}

fn bars(data: &[DataPoint], theme: &Theme, padding: Padding, max: f64) -> Vec<Shape> {
    let (cw, ch) = plot_size(padding);
    let slot = cw / data.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;
    let gap = slot - bar_width;
    let axis_y = padding.top + ch;

    let value_style = TextStyle::new(theme.fonts.body, 24.0, theme.colors.primary)
        .weight(FontWeight::Bold);
    let category_style =
        TextStyle::new(theme.fonts.body, 20.0, theme.colors.text).weight(FontWeight::Medium);

    let mut shapes = Vec::with_capacity(data.len() * 3);
    for (i, point) in data.iter().enumerate() {
        let height = point.value / max * ch;
        let x = padding.left + i as f64 * (bar_width + gap) + gap / 2.0;
        // Negative values hang below the axis rather than being clamped.
        let (y, h) = if height >= 0.0 {
            (axis_y - height, height)
        } else {
            (axis_y, -height)
        };
        let centre = x + bar_width / 2.0;

        shapes.push(Shape::Rect {
            rect: Rect::new(x, y, bar_width, h),
            fill: Some(theme.colors.accent),
            stroke: Some(Stroke::new(theme.colors.primary, 2.0)),
            role: ShapeRole::Bar,
        });
        shapes.push(label(
            centre,
            axis_y - height - 10.0,
            format_value(point.value),
            Anchor::Middle,
            value_style,
        ));
        shapes.push(label(
            centre,
            axis_y + 30.0,
            point.label.clone(),
            Anchor::Middle,
            category_style,
        ));
    }
    shapes
}

fn line(data: &[DataPoint], theme: &Theme, padding: Padding, max: f64) -> Vec<Shape> {
    let (cw, ch) = plot_size(padding);
    let step = cw / (data.len().saturating_sub(1).max(1)) as f64;
    let axis_y = padding.top + ch;

    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, p)| (padding.left + i as f64 * step, axis_y - p.value / max * ch))
        .collect();

    let value_style =
        TextStyle::new(theme.fonts.body, 20.0, theme.colors.text).weight(FontWeight::Bold);
    let category_style =
        TextStyle::new(theme.fonts.body, 20.0, theme.colors.text).weight(FontWeight::Medium);

    let mut shapes = vec![Shape::Polyline {
        points: points.clone(),
        stroke: Stroke::new(theme.colors.accent, 8.0).round(),
    }];
    for (point, &(x, y)) in data.iter().zip(&points) {
        shapes.push(Shape::Circle {
            cx: x,
            cy: y,
            r: 8.0,
            fill: Some(theme.colors.primary),
            stroke: Some(Stroke::new(Color::WHITE, 3.0)),
        });
        shapes.push(label(
            x,
            y - 20.0,
            format_value(point.value),
            Anchor::Middle,
            value_style,
        ));
        shapes.push(label(
            x,
            axis_y + 30.0,
            point.label.clone(),
            Anchor::Middle,
            category_style,
        ));
    }
    shapes
}

fn axis_labels(chart: &Chart, theme: &Theme) -> [Shape; 2] {
    let style = TextStyle::new(theme.fonts.heading, 24.0, theme.colors.text)
        .weight(FontWeight::Bold)
        .uppercase();
    [
        label(
            CHART_CANVAS.width / 2.0,
            CHART_CANVAS.height - 15.0,
            chart.x_axis_label.clone(),
            Anchor::Middle,
            style,
        ),
        Shape::Label {
            x: 30.0,
            y: CHART_CANVAS.height / 2.0,
            text: chart.y_axis_label.clone(),
            anchor: Anchor::Middle,
            rotation: Some(-90.0),
            style,
        },
    ]
}

/// The five slice colors, cycled by index.
pub fn pie_palette(theme: &Theme) -> [Color; 5] {
    [
        theme.colors.accent,
        theme.colors.primary,
        theme.colors.sidebar_background,
        PIE_NEUTRALS[0],
        PIE_NEUTRALS[1],
    ]
}

fn pie_chart(chart: &Chart, theme: &Theme) -> VisualBlock {
    let data = &chart.data;
    let total: f64 = data.iter().map(|p| p.value).sum();
    // A zero, negative or overflowing total, or any negative slice, has no
    // meaningful angles; such charts render as empty.
    if !has_usable_data(data)
        || !total.is_finite()
        || total <= 0.0
        || data.iter().any(|p| p.value < 0.0)
    {
        return placeholder(theme, NO_DATA);
    }

    let padding = SERIES_PADDING;
    let (cw, ch) = plot_size(padding);
    let radius = cw.min(ch) / 2.0;
    let cx = CHART_CANVAS.width / 2.0;
    let cy = (CHART_CANVAS.height + padding.top) / 2.0;
    let palette = pie_palette(theme);

    let percent_style =
        TextStyle::new(theme.fonts.body, 20.0, Color::WHITE).weight(FontWeight::Bold);
    let legend_style = TextStyle::new(theme.fonts.body, 20.0, theme.colors.text);

    let mut elements = Vec::with_capacity(data.len() * 4);
    let mut angle = 0.0;
    for (i, point) in data.iter().enumerate() {
        let sweep = point.value / total * 2.0 * PI;
        let fill = palette[i % palette.len()];

        elements.push(Shape::Wedge {
            cx,
            cy,
            r: radius,
            start: angle,
            end: angle + sweep,
            fill,
            stroke: Some(Stroke::new(Color::WHITE, 2.0)),
        });

        let mid = angle + sweep / 2.0;
        let label_r = radius * PIE_LABEL_RADIUS;
        elements.push(label(
            cx + label_r * mid.cos(),
            cy + label_r * mid.sin(),
            format!("{}%", format_value(round_half_up(point.value / total * 100.0))),
            Anchor::Middle,
            percent_style,
        ));

        let legend_y = padding.top + i as f64 * LEGEND_ROW;
        elements.push(Shape::Rect {
            rect: Rect::new(padding.left, legend_y, 20.0, 20.0),
            fill: Some(fill),
            stroke: None,
            role: ShapeRole::Legend,
        });
        elements.push(label(
            padding.left + 30.0,
            legend_y + 16.0,
            format!("{} ({})", point.label, format_value(point.value)),
            Anchor::Start,
            legend_style,
        ));

        angle += sweep;
    }

    figure_block(ChartFigure {
        kind: ChartKind::Pie,
        title: title_run(chart, theme, SERIES_TITLE_SIZE),
        canvas: CHART_CANVAS,
        padding,
        effective_max: None,
        elements,
    })
}

fn generic_visual(chart: &Chart, theme: &Theme) -> VisualBlock {
    let Some(markup) = chart.svg_content.as_deref() else {
        return placeholder(theme, NO_DATA);
    };

    match sanitize_svg(markup) {
        Ok(markup) => figure_block(ChartFigure {
            kind: ChartKind::Generic,
            title: title_run(chart, theme, SERIES_TITLE_SIZE),
            canvas: CHART_CANVAS,
            padding: SERIES_PADDING,
            effective_max: None,
            elements: vec![Shape::Markup { markup }],
        }),
        Err(e) => {
            warn!(error = %e, title = %chart.title, "rejected generic visual markup");
            placeholder(theme, VISUAL_UNAVAILABLE)
        }
    }
}
