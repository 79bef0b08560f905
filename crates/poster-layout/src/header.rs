//! The universal header band: motif overlay, two logo boxes and the
//! centered title block. Identical under every layout.

use poster_core::color::Color;
use poster_core::models::document::PosterDocument;
use poster_core::models::theme::{Motif, Theme};
use poster_core::visual::{
    BlockKind, BlockStyle, Border, FontWeight, Overlay, PathData, Placement, Rect, Shape, Sides,
    Stroke, TextAlign, TextRun, TextStyle, VisualBlock,
};
use poster_themes::motif::motif_for;

use crate::constants::{CANVAS, HEADER_HEIGHT};

pub const LOGO_LEFT: Rect = Rect::new(80.0, 40.0, 300.0, 320.0);
pub const LOGO_RIGHT: Rect = Rect::new(CANVAS.width - 80.0 - 300.0, 40.0, 300.0, 320.0);
pub const TITLE_BLOCK: Rect = Rect::new((CANVAS.width - 3500.0) / 2.0, 0.0, 3500.0, HEADER_HEIGHT);

pub fn header(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let mut children = Vec::with_capacity(4);
    if let Some(overlay) = motif_overlay(theme) {
        children.push(overlay);
    }
    children.push(logo(theme, LOGO_LEFT));
    children.push(logo(theme, LOGO_RIGHT));
    children.push(title_block(doc, theme));

    VisualBlock::new(
        BlockKind::Header,
        Placement::absolute(0.0, 0.0, CANVAS.width, HEADER_HEIGHT),
    )
    .styled(
        BlockStyle::default()
            .background(theme.colors.primary)
            .border(Border::side(Sides::Bottom, Color::GRAY_200, 8.0))
            .padding(80.0),
    )
    .with_children(children)
}

fn logo(theme: &Theme, rect: Rect) -> VisualBlock {
    let style = TextStyle::new(
        theme.fonts.body,
        36.0,
        theme.colors.sidebar_text.with_alpha(0.7),
    )
    .weight(FontWeight::Bold)
    .align(TextAlign::Center);

    VisualBlock::new(
        BlockKind::LogoBox {
            label: TextRun::new("LOGO", style),
        },
        Placement::Absolute { rect },
    )
    .styled(
        BlockStyle::default()
            .background(Color::WHITE.with_alpha(0.1))
            .border(Border::all(Color::WHITE.with_alpha(0.2), 2.0))
            .radius(6.0),
    )
}

fn title_block(doc: &PosterDocument, theme: &Theme) -> VisualBlock {
    let ink = theme.colors.sidebar_text;
    let title = TextStyle::new(theme.fonts.heading, 100.0, ink)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center)
        .uppercase();
    let authors = TextStyle::new(theme.fonts.body, 40.0, ink)
        .weight(FontWeight::Medium)
        .align(TextAlign::Center);
    let affiliation = TextStyle::new(theme.fonts.body, 32.0, ink.with_alpha(0.9))
        .align(TextAlign::Center)
        .italic();

    VisualBlock::new(
        BlockKind::TitleBlock {
            title: TextRun::new(doc.title.clone(), title),
            authors: TextRun::new(doc.authors.clone(), authors),
            affiliation: TextRun::new(doc.affiliation.clone(), affiliation),
        },
        Placement::Absolute { rect: TITLE_BLOCK },
    )
    .styled(BlockStyle::default().gap(24.0))
}

/// The decorative overlay for `theme`, or `None` for themes without one.
pub fn motif_overlay(theme: &Theme) -> Option<VisualBlock> {
    let motif = motif_for(theme)?;
    let color = theme.colors.accent;

    let (rect, view_box, opacity, shapes) = match motif {
        Motif::CurvedLeaf => (flush_right(HEADER_HEIGHT), 400.0, 0.2, ring_and_cross(color)),
        Motif::Wave => (
            // Three quarters of the band, inset from the right edge, on the bottom.
            Rect::new(CANVAS.width - 40.0 - 300.0, HEADER_HEIGHT - 300.0, 300.0, 300.0),
            100.0,
            0.15,
            waves(color),
        ),
        Motif::ConcentricCircles => (flush_right(HEADER_HEIGHT), 200.0, 0.1, target(color)),
        Motif::DiamondGrid => (flush_right(HEADER_HEIGHT), 100.0, 0.15, diamond(color)),
        Motif::LeafSilhouette => (flush_right(HEADER_HEIGHT), 100.0, 0.2, leaf(color)),
    };

    Some(VisualBlock::new(
        BlockKind::DecorativeOverlay(Overlay {
            motif,
            view_box,
            opacity,
            shapes,
        }),
        Placement::Absolute { rect },
    ))
}

fn flush_right(size: f64) -> Rect {
    Rect::new(CANVAS.width - size, 0.0, size, size)
}

fn ring_and_cross(color: Color) -> Vec<Shape> {
    let ring = PathData::new()
        .move_to(200.0, 0.0)
        .cubic_to(90.0, 0.0, 0.0, 90.0, 0.0, 200.0)
        .cubic_to(0.0, 310.0, 90.0, 400.0, 200.0, 400.0)
        .cubic_to(310.0, 400.0, 400.0, 310.0, 400.0, 200.0)
        .cubic_to(400.0, 90.0, 310.0, 0.0, 200.0, 0.0)
        .close()
        .move_to(200.0, 350.0)
        .cubic_to(117.0, 350.0, 50.0, 283.0, 50.0, 200.0)
        .cubic_to(50.0, 117.0, 117.0, 50.0, 200.0, 50.0)
        .cubic_to(283.0, 50.0, 350.0, 117.0, 350.0, 200.0)
        .cubic_to(350.0, 283.0, 283.0, 350.0, 200.0, 350.0)
        .close();
    let cross = PathData::new()
        .move_to(200.0, 100.0)
        .line_to(200.0, 300.0)
        .move_to(100.0, 200.0)
        .line_to(300.0, 200.0);

    vec![
        Shape::Path {
            data: ring,
            fill: Some(color),
            stroke: None,
        },
        Shape::Path {
            data: cross,
            fill: None,
            stroke: Some(Stroke::new(color, 20.0)),
        },
    ]
}

fn waves(color: Color) -> Vec<Shape> {
    [50.0, 60.0, 70.0]
        .into_iter()
        .map(|base| Shape::Path {
            data: PathData::new()
                .move_to(0.0, base)
                .quad_to(25.0, base - 50.0, 50.0, base)
                .smooth_quad_to(100.0, base),
            fill: None,
            stroke: Some(Stroke::new(color, 2.0)),
        })
        .collect()
}

fn target(color: Color) -> Vec<Shape> {
    let stroke = Stroke::new(color, 2.0);
    vec![
        Shape::Circle {
            cx: 100.0,
            cy: 100.0,
            r: 80.0,
            fill: None,
            stroke: Some(stroke),
        },
        Shape::Circle {
            cx: 100.0,
            cy: 100.0,
            r: 60.0,
            fill: None,
            stroke: Some(stroke),
        },
        Shape::Line {
            x1: 100.0,
            y1: 20.0,
            x2: 100.0,
            y2: 180.0,
            stroke,
        },
        Shape::Line {
            x1: 20.0,
            y1: 100.0,
            x2: 180.0,
            y2: 100.0,
            stroke,
        },
    ]
}

fn diamond(color: Color) -> Vec<Shape> {
    vec![
        Shape::Path {
            data: PathData::new()
                .move_to(10.0, 50.0)
                .line_to(50.0, 10.0)
                .line_to(90.0, 50.0)
                .line_to(50.0, 90.0)
                .close(),
            fill: None,
            stroke: Some(Stroke::new(color, 1.0)),
        },
        Shape::Path {
            data: PathData::new()
                .move_to(50.0, 10.0)
                .line_to(50.0, 90.0)
                .move_to(10.0, 50.0)
                .line_to(90.0, 50.0),
            fill: None,
            stroke: Some(Stroke::new(color, 0.5)),
        },
    ]
}

fn leaf(color: Color) -> Vec<Shape> {
    vec![Shape::Path {
        data: PathData::new()
            .move_to(50.0, 100.0)
            .quad_to(25.0, 50.0, 50.0, 0.0)
            .quad_to(75.0, 50.0, 50.0, 100.0)
            .close(),
        fill: Some(color),
        stroke: None,
    }]
}
