use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    BlockKind, BlockStyle, Border, Extent, Placement, SectionRole, Sides, VisualBlock,
};

use super::body;
use crate::constants::{AMBER, CANVAS, EMERALD, INDIGO, ROSE, SLATE, Tint, grid_unit, span_width};
use crate::sections::{
    banded_panel, chart_section, column, edge_panel, filled_section, section,
};

const PADDING: f64 = 48.0;
const GAP: f64 = 32.0;
pub const ABSTRACT_HEIGHT: f64 = 500.0;
pub const METHODOLOGY_HEIGHT: f64 = 1400.0;
pub const DISCUSSION_HEIGHT: f64 = 800.0;

/// Colour-coded panels on a four-column grid with a double-width centre.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let unit = grid_unit(CANVAS.width, PADDING, GAP, 4);

    let methodology = topped_panel(SLATE, Extent::Fixed(METHODOLOGY_HEIGHT)).with_children(vec![
        banded_panel(theme, SectionRole::Methods, "Methodology", &doc.methods, SLATE),
        VisualBlock::new(BlockKind::Region, Placement::fill())
            .styled(BlockStyle::default().padding(32.0))
            .with_children(vec![chart_section(doc, theme, Extent::Fill)]),
    ]);
    let results = topped_panel(INDIGO, Extent::Fill).with_children(vec![banded_panel(
        theme,
        SectionRole::Results,
        "Results",
        &doc.results,
        INDIGO,
    )]);

    body(
        PADDING,
        GAP,
        vec![
            column(
                unit,
                GAP,
                vec![
                    edge_panel(
                        theme,
                        SectionRole::Abstract,
                        "Abstract",
                        &doc.abstract_text,
                        ROSE,
                        Extent::Fixed(ABSTRACT_HEIGHT),
                    ),
                    filled_section(theme, SectionRole::Introduction, "Introduction", &doc.introduction),
                ],
            ),
            column(span_width(unit, GAP, 2), GAP, vec![methodology, results]),
            column(
                unit,
                GAP,
                vec![
                    edge_panel(
                        theme,
                        SectionRole::Conclusions,
                        "Conclusion",
                        &doc.conclusions,
                        EMERALD,
                        Extent::Fill,
                    ),
                    edge_panel(
                        theme,
                        SectionRole::Discussion,
                        "Discussion",
                        &doc.discussion,
                        AMBER,
                        Extent::Fixed(DISCUSSION_HEIGHT),
                    ),
                    section(theme, SectionRole::References, "References", &doc.references),
                ],
            ),
        ],
    )
}

fn topped_panel(tint: Tint, height: Extent) -> VisualBlock {
    VisualBlock::new(
        BlockKind::Region,
        Placement::Flow {
            width: Extent::Fill,
            height,
        },
    )
    .styled(
        BlockStyle::default()
            .background(tint.fill)
            .border(Border::side(Sides::Top, tint.edge, 8.0))
            .radius(12.0),
    )
}
