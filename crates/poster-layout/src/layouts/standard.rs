use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    BlockKind, BlockStyle, Border, Extent, FontWeight, Placement, SectionRole, TextAlign,
    TextRun, TextStyle, VisualBlock,
};

use super::body;
use crate::constants::{CANVAS, grid_unit};
use crate::sections::{chart_section, column, contact_lines, section, spacer};

const PADDING: f64 = 48.0;
const GAP: f64 = 64.0;
const STACK_GAP: f64 = 48.0;
pub const CHART_HEIGHT: f64 = 800.0;

/// Three equal columns; the chart sits mid-column two at a fixed height.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let unit = grid_unit(CANVAS.width, PADDING, GAP, 3);

    body(
        PADDING,
        GAP,
        vec![
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Abstract, "Abstract", &doc.abstract_text),
                    section(theme, SectionRole::Introduction, "Introduction", &doc.introduction),
                    section(theme, SectionRole::Methods, "Methods", &doc.methods),
                ],
            ),
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Results, "Results", &doc.results),
                    chart_section(doc, theme, Extent::Fixed(CHART_HEIGHT)),
                    section(theme, SectionRole::Discussion, "Discussion", &doc.discussion),
                ],
            ),
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Conclusions, "Conclusions", &doc.conclusions),
                    section(theme, SectionRole::References, "References", &doc.references),
                    spacer(),
                    contact_box(doc, theme),
                ],
            ),
        ],
    )
}

fn contact_box(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 36.0, theme.colors.primary)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center);
    let body = TextStyle::new(theme.fonts.body, 28.0, theme.colors.text).align(TextAlign::Center);

    VisualBlock::new(
        BlockKind::TextSection {
            role: SectionRole::Contact,
            heading: Some(TextRun::new("Contact Information", heading)),
            heading_band: None,
            paragraphs: contact_lines(doc),
            body,
        },
        Placement::auto(),
    )
    .styled(
        BlockStyle::default()
            .background(theme.colors.secondary)
            .border(Border::all(theme.colors.primary, 4.0))
            .radius(8.0)
            .padding(32.0)
            .gap(16.0),
    )
}
