//! Building blocks shared by the arrangements: text sections in their
//! several styles, the chart cell and flow containers.

use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    Band, BlockKind, BlockStyle, Border, Extent, FontWeight, Placement, SectionRole, Sides,
    TextAlign, TextRun, TextStyle, VisualBlock,
};

use crate::chart::render_chart;
use crate::constants::{FIGURE_CAPTION, Tint};

/// Split on line breaks only. An empty field is one empty paragraph.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn text_section(
    role: SectionRole,
    heading: Option<TextRun>,
    heading_band: Option<Band>,
    paragraphs: Vec<String>,
    body: TextStyle,
) -> VisualBlock {
    VisualBlock::new(
        BlockKind::TextSection {
            role,
            heading,
            heading_band,
            paragraphs,
            body,
        },
        Placement::auto(),
    )
}

/// The default section: a tinted heading band over a white body with a
/// left rule. References use a smaller body size.
pub fn section(theme: &Theme, role: SectionRole, title: &str, text: &str) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 40.0, theme.colors.primary)
        .weight(FontWeight::Black)
        .align(TextAlign::Center)
        .uppercase();
    let body_size = if role == SectionRole::References {
        24.0
    } else {
        28.0
    };
    let body = TextStyle::new(theme.fonts.body, body_size, theme.colors.text)
        .align(TextAlign::Justify);

    text_section(
        role,
        Some(TextRun::new(title, heading)),
        Some(Band {
            background: Some(theme.colors.secondary),
            border: Some(Border::side(Sides::Bottom, theme.colors.primary, 4.0)),
            padding: 8.0,
        }),
        paragraphs(text),
        body,
    )
    .styled(
        BlockStyle::default()
            .background(Color::WHITE)
            .border(Border::side(Sides::Left, theme.colors.secondary, 4.0))
            .radius(2.0)
            .padding(24.0)
            .gap(16.0),
    )
}

/// Solid primary heading over a faint primary wash.
pub fn filled_section(theme: &Theme, role: SectionRole, title: &str, text: &str) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 32.0, Color::WHITE)
        .weight(FontWeight::Bold)
        .uppercase();
    let body = TextStyle::new(theme.fonts.body, 24.0, theme.colors.text).align(TextAlign::Justify);

    let mut block = text_section(
        role,
        Some(TextRun::new(title, heading)),
        Some(Band {
            background: Some(theme.colors.primary),
            border: None,
            padding: 16.0,
        }),
        paragraphs(text),
        body,
    )
    .styled(
        BlockStyle::default()
            .background(theme.colors.primary.with_alpha(0x15 as f64 / 255.0))
            .radius(12.0)
            .padding(24.0),
    );
    block.placement = Placement::fill();
    block
}

/// A section on the dark sidebar: translucent boxed heading, light text.
pub fn sidebar_section(
    theme: &Theme,
    role: SectionRole,
    title: &str,
    paragraphs: Vec<String>,
    align: TextAlign,
) -> VisualBlock {
    let ink = theme.colors.sidebar_text;
    let heading = TextStyle::new(theme.fonts.heading, 50.0, ink)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center)
        .uppercase();
    let body = TextStyle::new(theme.fonts.body, 32.0, ink).align(align);

    text_section(
        role,
        Some(TextRun::new(title, heading)),
        Some(Band {
            background: Some(Color::WHITE.with_alpha(0.1)),
            border: Some(Border::all(Color::WHITE.with_alpha(0.2), 2.0)),
            padding: 16.0,
        }),
        paragraphs,
        body,
    )
    .styled(BlockStyle::default().gap(16.0))
}

/// Light panel with a thick tinted left edge and no heading band.
pub fn edge_panel(
    theme: &Theme,
    role: SectionRole,
    title: &str,
    text: &str,
    tint: Tint,
    height: Extent,
) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 40.0, tint.ink).weight(FontWeight::Bold);
    let body = TextStyle::new(theme.fonts.body, 24.0, theme.colors.text);

    let mut block = text_section(
        role,
        Some(TextRun::new(title, heading)),
        None,
        paragraphs(text),
        body,
    )
    .styled(
        BlockStyle::default()
            .background(tint.fill)
            .border(Border::side(Sides::Left, tint.edge, 8.0))
            .radius(12.0)
            .padding(32.0)
            .gap(16.0),
    );
    block.placement = Placement::Flow {
        width: Extent::Fill,
        height,
    };
    block
}

/// Tinted band heading over a tinted body, topped by a thick rule.
pub fn banded_panel(
    theme: &Theme,
    role: SectionRole,
    title: &str,
    text: &str,
    tint: Tint,
) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.heading, 32.0, tint.ink)
        .weight(FontWeight::Bold)
        .uppercase();
    let body = TextStyle::new(theme.fonts.body, 26.0, theme.colors.text);

    text_section(
        role,
        Some(TextRun::new(title, heading)),
        Some(Band {
            background: Some(tint.band),
            border: None,
            padding: 16.0,
        }),
        paragraphs(text),
        body,
    )
    .styled(BlockStyle::default().padding(32.0))
}

/// Contact details as three lines: name, organisation, email.
pub fn contact_lines(doc: &PosterDocument) -> Vec<String> {
    vec![
        doc.contact_name.clone(),
        doc.contact_org.clone(),
        doc.contact_email.clone(),
    ]
}

/// The chart cell: framed chart (or a no-chart placeholder) plus caption.
pub fn chart_section(doc: &PosterDocument, theme: &Theme, height: Extent) -> VisualBlock {
    let content = match &doc.chart {
        Some(chart) => render_chart(chart, theme),
        None => no_chart_placeholder(theme),
    };

    let frame = VisualBlock::new(BlockKind::Frame, Placement::fill())
        .styled(
            BlockStyle::default()
                .background(Color::WHITE)
                .border(Border::all(Color::GRAY_200, 2.0))
                .radius(2.0)
                .padding(16.0)
                .gap(16.0),
        )
        .with_children(vec![content]);

    let caption = VisualBlock::new(
        BlockKind::Caption(TextRun::new(
            FIGURE_CAPTION,
            TextStyle::new(theme.fonts.body, 24.0, theme.colors.text.with_alpha(0.7))
                .align(TextAlign::Center)
                .italic(),
        )),
        Placement::auto(),
    );

    VisualBlock::new(
        BlockKind::Column,
        Placement::Flow {
            width: Extent::Fill,
            height,
        },
    )
    .styled(BlockStyle::default().gap(8.0))
    .with_children(vec![frame, caption])
}

fn no_chart_placeholder(theme: &Theme) -> VisualBlock {
    let ink = Color::GRAY_400;
    VisualBlock::new(
        BlockKind::Placeholder {
            lines: vec![
                TextRun::new(
                    "No Chart Data",
                    TextStyle::new(theme.fonts.body, 30.0, ink)
                        .weight(FontWeight::Bold)
                        .align(TextAlign::Center),
                ),
                TextRun::new(
                    "Add chart data in the Editor",
                    TextStyle::new(theme.fonts.body, 24.0, ink)
                        .align(TextAlign::Center)
                        .italic(),
                ),
            ],
        },
        Placement::fill(),
    )
    .styled(BlockStyle::default().background(Color::GRAY_50).gap(8.0))
}

/// A vertical stack `width` wide.
pub fn column(width: f64, gap: f64, children: Vec<VisualBlock>) -> VisualBlock {
    VisualBlock::new(BlockKind::Column, Placement::fixed_width(width))
        .styled(BlockStyle::default().gap(gap))
        .with_children(children)
}

/// Empty block that absorbs leftover height, pushing later siblings down.
pub fn spacer() -> VisualBlock {
    VisualBlock::new(BlockKind::Region, Placement::fill())
}
