use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::theme::Theme;
use poster_core::visual::{
    Band, BlockKind, BlockStyle, Border, Extent, FontWeight, PathData, Placement, Rect,
    SectionRole, Sides, Stroke, TextAlign, TextRun, TextStyle, VisualBlock,
};

use crate::constants::{
    BODY_HEIGHT, CANVAS, HEADER_HEIGHT, MATERIALS_PREVIEW_CHARS, PALE_ACCENT, PALE_ACCENT_SWAP,
};
use crate::sections::{chart_section, paragraphs};

/// Node rectangles in body coordinates.
pub const INTRO_NODE: Rect = Rect::new(500.0, 200.0, 1200.0, 800.0);
pub const CONCLUSION_NODE: Rect = Rect::new(3100.0, 200.0, 1200.0, 800.0);
pub const MATERIALS_NODE: Rect = Rect::new(300.0, 1800.0, 1000.0, 800.0);
pub const METHODOLOGY_NODE: Rect = Rect::new(1600.0, 2000.0, 1400.0, 900.0);
pub const RESULTS_NODE: Rect = Rect::new(3300.0, 1800.0, 1200.0, 900.0);
pub const CHART_NODE: Rect = Rect::new(1800.0, 1200.0, 1000.0, 600.0);

/// Quadratic arrows as (start, control, end), in body coordinates.
pub const ARROWS: [[(f64, f64); 3]; 4] = [
    [(1200.0, 800.0), (800.0, 2000.0), (1000.0, 2500.0)],
    [(1500.0, 2700.0), (2400.0, 2900.0), (2200.0, 2500.0)],
    [(2600.0, 2500.0), (3200.0, 2900.0), (3600.0, 2500.0)],
    [(3900.0, 2200.0), (4200.0, 1500.0), (3600.0, 900.0)],
];
const ARROW_WIDTH: f64 = 24.0;

/// Five rounded nodes joined by curved arrows, with the chart floating in
/// the middle of the ring.
pub fn arrange(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let mut children = vec![
        node(theme, SectionRole::Introduction, "Introduction", &doc.introduction, INTRO_NODE),
        node(theme, SectionRole::Conclusions, "Conclusion", &doc.conclusions, CONCLUSION_NODE),
        node(
            theme,
            SectionRole::Materials,
            "Materials",
            &materials_preview(&doc.methods),
            MATERIALS_NODE,
        ),
        node(theme, SectionRole::Methods, "Methodology", &doc.methods, METHODOLOGY_NODE),
        node(theme, SectionRole::Results, "Results", &doc.results, RESULTS_NODE),
    ];

    let color = arrow_color(theme);
    children.extend(ARROWS.iter().map(|&[start, control, end]| {
        VisualBlock::new(
            BlockKind::Arrow {
                path: PathData::new()
                    .move_to(start.0, start.1)
                    .quad_to(control.0, control.1, end.0, end.1),
                stroke: Stroke::new(color, ARROW_WIDTH).round(),
                head: color,
            },
            Placement::absolute(0.0, HEADER_HEIGHT, CANVAS.width, BODY_HEIGHT),
        )
    }));

    children.push(
        VisualBlock::new(BlockKind::Region, Placement::Absolute { rect: global(CHART_NODE) })
            .styled(
                BlockStyle::default()
                    .background(Color::WHITE)
                    .border(Border::all(Color::WHITE, 4.0))
                    .radius(12.0)
                    .padding(16.0),
            )
            .with_children(vec![chart_section(doc, theme, Extent::Fill)]),
    );

    VisualBlock::new(
        BlockKind::Region,
        Placement::absolute(0.0, HEADER_HEIGHT, CANVAS.width, BODY_HEIGHT),
    )
    .styled(BlockStyle::default().background(Color::WHITE))
    .with_children(children)
}

/// First 300 characters of the methods text, always followed by `...`.
pub fn materials_preview(methods: &str) -> String {
    let mut preview: String = methods.chars().take(MATERIALS_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// The theme accent, unless it is too pale to read as an arrow.
pub fn arrow_color(theme: &Theme) -> Color {
    if theme.colors.accent == PALE_ACCENT {
        PALE_ACCENT_SWAP
    } else {
        theme.colors.accent
    }
}

fn global(rect: Rect) -> Rect {
    Rect::new(rect.x, rect.y + HEADER_HEIGHT, rect.w, rect.h)
}

fn node(theme: &Theme, role: SectionRole, title: &str, text: &str, rect: Rect) -> VisualBlock {
    let heading = TextStyle::new(theme.fonts.body, 36.0, theme.colors.primary)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center)
        .uppercase();
    let body = TextStyle::new(theme.fonts.body, 22.0, theme.colors.text)
        .align(TextAlign::Center)
        .clamp(12);

    VisualBlock::new(
        BlockKind::TextSection {
            role,
            heading: Some(TextRun::new(title, heading)),
            heading_band: Some(Band {
                background: Some(theme.colors.secondary),
                border: Some(Border::side(Sides::Bottom, Color::GRAY_200, 2.0)),
                padding: 16.0,
            }),
            paragraphs: paragraphs(text),
            body,
        },
        Placement::Absolute { rect: global(rect) },
    )
    .styled(
        BlockStyle::default()
            .background(Color::GRAY_100)
            .border(Border::all(Color::GRAY_200, 8.0))
            .radius(100.0)
            .padding(32.0),
    )
}
