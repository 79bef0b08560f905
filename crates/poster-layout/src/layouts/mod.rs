//! One arrangement function per [`LayoutId`]. Each returns the body
//! region, absolutely placed under the header.

mod classic;
mod cycle;
mod geometric;
mod research;
mod standard;
mod visual;

use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::layout::LayoutId;
use poster_core::models::theme::Theme;
use poster_core::visual::{BlockKind, BlockStyle, Placement, VisualBlock};

use crate::constants::{BODY_HEIGHT, CANVAS, HEADER_HEIGHT};

pub use cycle::{arrow_color, materials_preview};

pub fn arrange(doc: &PosterDocument, theme: &Theme, layout: LayoutId) -> VisualBlock {
    match layout {
        LayoutId::Classic => classic::arrange(doc, theme),
        LayoutId::Standard => standard::arrange(doc, theme),
        LayoutId::Visual => visual::arrange(doc, theme),
        LayoutId::Cycle => cycle::arrange(doc, theme),
        LayoutId::Geometric => geometric::arrange(doc, theme),
        LayoutId::Research => research::arrange(doc, theme),
    }
}

/// The white body area below the header, laid out as a row of tracks.
fn body(padding: f64, gap: f64, children: Vec<VisualBlock>) -> VisualBlock {
    VisualBlock::new(
        BlockKind::Region,
        Placement::absolute(0.0, HEADER_HEIGHT, CANVAS.width, BODY_HEIGHT),
    )
    .styled(
        BlockStyle::default()
            .background(Color::WHITE)
            .padding(padding)
            .gap(gap)
            .row(),
    )
    .with_children(children)
}
