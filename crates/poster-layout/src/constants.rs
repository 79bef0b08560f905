//! Fixed geometry and palettes of the poster canvas.

use poster_core::color::Color;
use poster_core::visual::{Padding, Size};

/// Logical poster canvas, 48×36 inches at 100 units per inch.
pub const CANVAS: Size = Size {
    width: 4800.0,
    height: 3600.0,
};
pub const HEADER_HEIGHT: f64 = 400.0;
pub const BODY_HEIGHT: f64 = CANVAS.height - HEADER_HEIGHT;

pub const CHART_CANVAS: Size = Size {
    width: 800.0,
    height: 500.0,
};

/// Bar charts leave extra room above the plot for value labels.
pub const BAR_PADDING: Padding = Padding {
    top: 80.0,
    right: 40.0,
    bottom: 80.0,
    left: 100.0,
};
pub const SERIES_PADDING: Padding = Padding {
    top: 60.0,
    ..BAR_PADDING
};

pub const BAR_TITLE_SIZE: f64 = 32.0;
pub const SERIES_TITLE_SIZE: f64 = 28.0;

pub const GRID_TICKS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
pub const HEADROOM: f64 = 1.1;
pub const FALLBACK_MAX: f64 = 100.0;
/// Share of each bar slot taken by the bar; the rest is split either side.
pub const BAR_FILL_RATIO: f64 = 0.6;
pub const PIE_LABEL_RADIUS: f64 = 0.7;
pub const PIE_NEUTRALS: [Color; 2] = [Color::rgb(0x94, 0xa3, 0xb8), Color::rgb(0xcb, 0xd5, 0xe1)];
pub const LEGEND_ROW: f64 = 30.0;

pub const GRID_COLOR: Color = Color::GRAY_200;
pub const TICK_COLOR: Color = Color::GRAY_500;

pub const MATERIALS_PREVIEW_CHARS: usize = 300;
pub const FIGURE_CAPTION: &str = "Figure 1. Analysis of Key Metrics.";
pub const ACKNOWLEDGEMENTS: &str =
    "We thank the school administration and our mentors for their support.";

/// Accent that is too pale for cycle arrows, and its replacement.
pub const PALE_ACCENT: Color = Color::rgb(0xfe, 0xf0, 0x8a);
pub const PALE_ACCENT_SWAP: Color = Color::rgb(0xfc, 0xa5, 0xa5);

/// Fixed tint family for a geometric panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub fill: Color,
    pub band: Color,
    pub edge: Color,
    pub ink: Color,
}

pub const ROSE: Tint = Tint {
    fill: Color::rgb(0xff, 0xf1, 0xf2),
    band: Color::rgb(0xff, 0xf1, 0xf2),
    edge: Color::rgb(0xfb, 0x71, 0x85),
    ink: Color::rgb(0x9f, 0x12, 0x39),
};
pub const SLATE: Tint = Tint {
    fill: Color::rgb(0xf1, 0xf5, 0xf9),
    band: Color::rgb(0xe2, 0xe8, 0xf0),
    edge: Color::rgb(0x94, 0xa3, 0xb8),
    ink: Color::rgb(0x33, 0x41, 0x55),
};
pub const INDIGO: Tint = Tint {
    fill: Color::rgb(0xee, 0xf2, 0xff),
    band: Color::rgb(0xe0, 0xe7, 0xff),
    edge: Color::rgb(0x81, 0x8c, 0xf8),
    ink: Color::rgb(0x37, 0x30, 0xa3),
};
pub const EMERALD: Tint = Tint {
    fill: Color::rgb(0xec, 0xfd, 0xf5),
    band: Color::rgb(0xec, 0xfd, 0xf5),
    edge: Color::rgb(0x10, 0xb9, 0x81),
    ink: Color::rgb(0x06, 0x5f, 0x46),
};
pub const AMBER: Tint = Tint {
    fill: Color::rgb(0xff, 0xfb, 0xeb),
    band: Color::rgb(0xff, 0xfb, 0xeb),
    edge: Color::rgb(0xfb, 0xbf, 0x24),
    ink: Color::rgb(0x92, 0x40, 0x0e),
};

/// Width of one grid unit: `cols` equal tracks inside `width` after
/// outer padding and inter-track gaps.
pub fn grid_unit(width: f64, padding: f64, gap: f64, cols: u32) -> f64 {
    let cols = f64::from(cols.max(1));
    (width - 2.0 * padding - (cols - 1.0) * gap) / cols
}

/// Width of a track spanning `span` units.
pub fn span_width(unit: f64, gap: f64, span: u32) -> f64 {
    let span = f64::from(span.max(1));
    unit * span + gap * (span - 1.0)
}
