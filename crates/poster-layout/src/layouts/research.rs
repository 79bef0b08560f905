use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    BlockKind, BlockStyle, Border, Extent, FontWeight, Placement, SectionRole, Sides, TextRun,
    TextStyle, VisualBlock,
};

use super::body;
use crate::constants::{ACKNOWLEDGEMENTS, CANVAS, grid_unit};
use crate::sections::{chart_section, column, paragraphs, section, spacer};

const PADDING: f64 = 64.0;
const GAP: f64 = 48.0;
const STACK_GAP: f64 = 40.0;

/// Dense four-column grid: compact abstract, dashed chart cell and a
/// closing acknowledgements note.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let unit = grid_unit(CANVAS.width, PADDING, GAP, 4);

    let chart_cell = VisualBlock::new(BlockKind::Region, Placement::fill())
        .styled(
            BlockStyle::default()
                .border(Border::all(Color::GRAY_300, 4.0).dashed())
                .radius(8.0)
                .padding(16.0),
        )
        .with_children(vec![chart_section(doc, theme, Extent::Fill)]);

    body(
        PADDING,
        GAP,
        vec![
            column(
                unit,
                STACK_GAP,
                vec![
                    compact_abstract(doc, theme),
                    section(theme, SectionRole::Introduction, "Introduction", &doc.introduction),
                ],
            ),
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Methods, "Methods", &doc.methods),
                    chart_cell,
                ],
            ),
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Results, "Results", &doc.results),
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
                    acknowledgements(theme),
                ],
            ),
        ],
    )
}

fn compact_abstract(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 32.0, theme.colors.text)
        .weight(FontWeight::Bold);
    let body = TextStyle::new(theme.fonts.body, 20.0, theme.colors.text);

    VisualBlock::new(
        BlockKind::TextSection {
            role: SectionRole::Abstract,
            heading: Some(TextRun::new("Abstract", heading)),
            heading_band: None,
            paragraphs: paragraphs(&doc.abstract_text),
            body,
        },
        Placement::auto(),
    )
    .styled(
        BlockStyle::default()
            .background(Color::GRAY_100)
            .border(Border::side(Sides::Bottom, Color::GRAY_400, 4.0))
            .padding(24.0)
            .gap(8.0),
    )
}

fn acknowledgements(theme: &Theme) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 24.0, theme.colors.text)
        .weight(FontWeight::Bold);
    let body = TextStyle::new(theme.fonts.body, 20.0, theme.colors.text);

    VisualBlock::new(
        BlockKind::TextSection {
            role: SectionRole::Acknowledgements,
            heading: Some(TextRun::new("Acknowledgements", heading)),
            heading_band: None,
            paragraphs: vec![ACKNOWLEDGEMENTS.to_string()],
            body,
        },
        Placement::auto(),
    )
    .styled(
        BlockStyle::default()
            .border(Border::side(Sides::Top, theme.colors.primary, 4.0))
            .padding(24.0)
            .gap(8.0),
    )
}
