use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    BlockKind, BlockStyle, Border, Extent, FontWeight, Placement, SectionRole, TextAlign,
    TextStyle, VisualBlock,
};

use super::body;
use crate::constants::{CANVAS, grid_unit, span_width};
use crate::sections::{chart_section, column, section, spacer};

const PADDING: f64 = 48.0;
const GAP: f64 = 48.0;
const STACK_GAP: f64 = 40.0;

/// Four-column grid: narrow text columns either side of a double-width
/// centre that leads with the chart.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let unit = grid_unit(CANVAS.width, PADDING, GAP, 4);

    let chart_well = VisualBlock::new(BlockKind::Region, Placement::fill())
        .styled(
            BlockStyle::default()
                .border(Border::all(theme.colors.secondary, 8.0))
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
                    section(theme, SectionRole::Abstract, "Abstract", &doc.abstract_text),
                    section(theme, SectionRole::Introduction, "Introduction", &doc.introduction),
                    section(theme, SectionRole::Methods, "Methods", &doc.methods),
                ],
            ),
            column(
                span_width(unit, GAP, 2),
                STACK_GAP,
                vec![
                    chart_well,
                    section(theme, SectionRole::Results, "Results & Analysis", &doc.results),
                ],
            ),
            column(
                unit,
                STACK_GAP,
                vec![
                    section(theme, SectionRole::Discussion, "Discussion", &doc.discussion),
                    section(theme, SectionRole::Conclusions, "Conclusions", &doc.conclusions),
                    section(theme, SectionRole::References, "References", &doc.references),
                    spacer(),
                    contact_line(doc, theme),
                ],
            ),
        ],
    )
}

fn contact_line(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let style = TextStyle::new(theme.fonts.body, 24.0, theme.colors.primary)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center);
    VisualBlock::new(
        BlockKind::TextSection {
            role: SectionRole::Contact,
            heading: None,
            heading_band: None,
            paragraphs: vec![format!("{} | {}", doc.contact_name, doc.contact_email)],
            body: style,
        },
        Placement::auto(),
    )
}
