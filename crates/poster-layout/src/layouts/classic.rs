use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    BlockKind, BlockStyle, Border, Extent, Placement, SectionRole, Sides, TextAlign, VisualBlock,
};

use super::body;
use crate::constants::{CANVAS, grid_unit};
use crate::sections::{
    chart_section, column, contact_lines, paragraphs, section, sidebar_section, spacer,
};

pub const SIDEBAR_WIDTH: f64 = 1000.0;
const PADDING: f64 = 48.0;
const GAP: f64 = 48.0;

/// Left sidebar (abstract, contact) and three flowing columns.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let sidebar = VisualBlock::new(BlockKind::Sidebar, Placement::fixed_width(SIDEBAR_WIDTH))
        .styled(
            BlockStyle::default()
                .background(theme.colors.sidebar_background)
                .border(Border::side(Sides::Right, Color::GRAY_200, 8.0))
                .padding(PADDING)
                .gap(PADDING),
        )
        .with_children(vec![
            sidebar_section(
                theme,
                SectionRole::Abstract,
                "Abstract",
                paragraphs(&doc.abstract_text),
                TextAlign::Justify,
            ),
            spacer(),
            sidebar_section(
                theme,
                SectionRole::Contact,
                "Contact",
                contact_lines(doc),
                TextAlign::Left,
            ),
        ]);

    let unit = grid_unit(CANVAS.width - SIDEBAR_WIDTH, PADDING, GAP, 3);
    let columns = VisualBlock::new(BlockKind::Region, Placement::fill())
        .styled(
            BlockStyle::default()
                .background(Color::WHITE)
                .padding(PADDING)
                .gap(GAP)
                .row(),
        )
        .with_children(vec![
            column(
                unit,
                GAP,
                vec![
                    section(theme, SectionRole::Introduction, "Introduction", &doc.introduction),
                    section(theme, SectionRole::Methods, "Methods", &doc.methods),
                ],
            ),
            column(
                unit,
                GAP,
                vec![
                    section(theme, SectionRole::Results, "Results", &doc.results),
                    chart_section(doc, theme, Extent::Fill),
                ],
            ),
            column(
                unit,
                GAP,
                vec![
                    section(theme, SectionRole::Discussion, "Discussion", &doc.discussion),
                    section(theme, SectionRole::Conclusions, "Conclusions", &doc.conclusions),
                    section(theme, SectionRole::References, "References", &doc.references),
                ],
            ),
        ]);

    body(0.0, 0.0, vec![sidebar, columns])
}
