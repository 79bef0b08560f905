//! poster-layout
//!
//! The layout engine: `(PosterDocument, Theme, LayoutId)` to a positioned
//! [`PosterTree`] on the fixed 4800×3600 canvas, plus the chart renderer
//! it embeds. Everything here is pure and deterministic; nothing fails.

pub mod chart;
pub mod constants;
pub mod header;
pub mod layouts;
pub mod sections;

use poster_core::models::document::PosterDocument;
use poster_core::models::layout::LayoutId;
use poster_core::models::theme::Theme;
use poster_core::visual::{PosterTree, Size, TextStyle};
use tracing::debug;

pub use chart::render_chart;
use constants::CANVAS;

/// Render a poster. Identical inputs always produce an identical tree.
pub fn render(doc: &PosterDocument, theme: &Theme, layout: LayoutId) -> PosterTree {
    debug!(layout = %layout, theme = theme.id, "rendering poster");

    PosterTree {
        canvas: CANVAS,
        layout,
        theme_id: theme.id,
        background: theme.colors.background,
        text: TextStyle::new(theme.fonts.body, 28.0, theme.colors.text),
        header: header::header(doc, theme),
        body: layouts::arrange(doc, theme, layout),
    }
}

/// On-screen size of `tree` at a uniform `factor`. The tree is unchanged.
pub fn scaled_size(tree: &PosterTree, factor: f64) -> Size {
    Size {
        width: tree.canvas.width * factor,
        height: tree.canvas.height * factor,
    }
}
