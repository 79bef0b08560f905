//! The positioned visual tree produced by the layout engine.
//!
//! Every color and font in the tree is already resolved from the theme, so
//! consumers (SVG serializer, preview, exporters) never look a theme up.
//! Absolute rectangles are in poster coordinates on the fixed logical
//! canvas. Chart shapes are in chart-canvas coordinates.

use std::fmt::Write as _;

use serde::Serialize;

use crate::color::Color;
use crate::models::chart::ChartKind;
use crate::models::layout::LayoutId;
use crate::models::theme::Motif;
use crate::sanitize::SanitizedMarkup;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Size along one axis of a flowed block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Extent {
    /// Sized by content.
    #[default]
    Auto,
    Fixed(f64),
    /// Takes whatever space the parent has left.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Placement {
    Absolute { rect: Rect },
    Flow { width: Extent, height: Extent },
}

impl Placement {
    pub const fn absolute(x: f64, y: f64, w: f64, h: f64) -> Self {
        Placement::Absolute {
            rect: Rect::new(x, y, w, h),
        }
    }

    pub const fn auto() -> Self {
        Placement::Flow {
            width: Extent::Fill,
            height: Extent::Auto,
        }
    }

    pub const fn fill() -> Self {
        Placement::Flow {
            width: Extent::Fill,
            height: Extent::Fill,
        }
    }

    pub const fn fixed_height(h: f64) -> Self {
        Placement::Flow {
            width: Extent::Fill,
            height: Extent::Fixed(h),
        }
    }

    pub const fn fixed_width(w: f64) -> Self {
        Placement::Flow {
            width: Extent::Fixed(w),
            height: Extent::Fill,
        }
    }

    pub fn rect(&self) -> Option<Rect> {
        match self {
            Placement::Absolute { rect } => Some(*rect),
            Placement::Flow { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sides {
    All,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub color: Color,
    pub width: f64,
    pub sides: Sides,
    pub dashed: bool,
}

impl Border {
    pub const fn all(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            sides: Sides::All,
            dashed: false,
        }
    }

    pub const fn side(sides: Sides, color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            sides,
            dashed: false,
        }
    }

    pub const fn dashed(self) -> Self {
        Self {
            dashed: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
    Black,
}

impl FontWeight {
    /// CSS numeric weight.
    pub fn css(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Fully resolved text appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: &'static str,
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
    pub italic: bool,
    pub uppercase: bool,
    /// Maximum visible lines; overflow is clipped by the presentation.
    pub line_clamp: Option<u32>,
}

impl TextStyle {
    pub const fn new(family: &'static str, size: f64, color: Color) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::Normal,
            color,
            align: TextAlign::Left,
            italic: false,
            uppercase: false,
            line_clamp: None,
        }
    }

    pub const fn weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    pub const fn align(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    pub const fn uppercase(self) -> Self {
        Self {
            uppercase: true,
            ..self
        }
    }

    pub const fn clamp(self, lines: u32) -> Self {
        Self {
            line_clamp: Some(lines),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// Box decoration and child spacing of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BlockStyle {
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub corner_radius: f64,
    pub padding: f64,
    pub gap: f64,
    pub direction: Direction,
}

impl BlockStyle {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn row(mut self) -> Self {
        self.direction = Direction::Row;
        self
    }
}

/// Semantic role of a text section, independent of its heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    Abstract,
    Introduction,
    Methods,
    Materials,
    Results,
    Discussion,
    Conclusions,
    References,
    Contact,
    Acknowledgements,
}

/// Decoration behind a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub motif: Motif,
    /// Side length of the square coordinate system the shapes use.
    pub view_box: f64,
    pub opacity: f64,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    TitleBlock {
        title: TextRun,
        authors: TextRun,
        affiliation: TextRun,
    },
    LogoBox {
        label: TextRun,
    },
    DecorativeOverlay(Overlay),
    Sidebar,
    Column,
    /// Plain container: the body, a grid, a wrapper around a chart.
    Region,
    /// Bordered chart cell holding a chart or placeholder and a caption.
    Frame,
    TextSection {
        role: SectionRole,
        heading: Option<TextRun>,
        heading_band: Option<Band>,
        paragraphs: Vec<String>,
        body: TextStyle,
    },
    ChartBlock(ChartFigure),
    Placeholder {
        lines: Vec<TextRun>,
    },
    Caption(TextRun),
    Arrow {
        path: PathData,
        stroke: Stroke,
        head: Color,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualBlock {
    pub kind: BlockKind,
    pub placement: Placement,
    pub style: BlockStyle,
    pub children: Vec<VisualBlock>,
}

impl VisualBlock {
    pub fn new(kind: BlockKind, placement: Placement) -> Self {
        Self {
            kind,
            placement,
            style: BlockStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn styled(mut self, style: BlockStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<VisualBlock>) -> Self {
        self.children = children;
        self
    }

    pub fn push(&mut self, child: VisualBlock) {
        self.children.push(child);
    }

    /// Depth-first, pre-order walk of this block and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn text_sections(&self) -> impl Iterator<Item = &VisualBlock> {
        self.walk()
            .filter(|b| matches!(b.kind, BlockKind::TextSection { .. }))
    }

    pub fn find_section(&self, role: SectionRole) -> Option<&VisualBlock> {
        self.walk().find(
            |b| matches!(&b.kind, BlockKind::TextSection { role: r, .. } if *r == role),
        )
    }

    pub fn chart_figures(&self) -> impl Iterator<Item = &ChartFigure> {
        self.walk().filter_map(|b| match &b.kind {
            BlockKind::ChartBlock(figure) => Some(figure),
            _ => None,
        })
    }

    /// The text of a section, paragraphs rejoined with `\n`.
    pub fn section_text(&self) -> Option<String> {
        match &self.kind {
            BlockKind::TextSection { paragraphs, .. } => Some(paragraphs.join("\n")),
            _ => None,
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a VisualBlock>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a VisualBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        self.stack.extend(block.children.iter().rev());
        Some(block)
    }
}

/// The root of a rendered poster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterTree {
    pub canvas: Size,
    pub layout: LayoutId,
    pub theme_id: &'static str,
    pub background: Color,
    /// Body text color and family inherited by every block.
    pub text: TextStyle,
    pub header: VisualBlock,
    pub body: VisualBlock,
}

impl PosterTree {
    pub fn walk(&self) -> impl Iterator<Item = &VisualBlock> {
        self.header.walk().chain(self.body.walk())
    }

    pub fn find_section(&self, role: SectionRole) -> Option<&VisualBlock> {
        self.body.find_section(role)
    }

    pub fn chart_figures(&self) -> impl Iterator<Item = &ChartFigure> {
        self.body.chart_figures()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.header.walk().find_map(|b| match &b.kind {
            BlockKind::DecorativeOverlay(overlay) => Some(overlay),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// A chart drawn on its own fixed canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub kind: ChartKind,
    pub title: TextRun,
    pub canvas: Size,
    pub padding: Padding,
    /// Scale ceiling for bar and line charts.
    pub effective_max: Option<f64>,
    pub elements: Vec<Shape>,
}

impl ChartFigure {
    pub fn plot_width(&self) -> f64 {
        self.canvas.width - self.padding.left - self.padding.right
    }

    pub fn plot_height(&self) -> f64 {
        self.canvas.height - self.padding.top - self.padding.bottom
    }

    pub fn bars(&self) -> impl Iterator<Item = &Rect> {
        self.elements.iter().filter_map(|s| match s {
            Shape::Rect {
                rect, role: ShapeRole::Bar, ..
            } => Some(rect),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &Shape> {
        self.elements
            .iter()
            .filter(|s| matches!(s, Shape::Wedge { .. }))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|s| match s {
            Shape::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub round: bool,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: false,
        }
    }

    pub const fn round(self) -> Self {
        Self {
            round: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// What a rectangle stands for inside a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRole {
    #[default]
    Decoration,
    Bar,
    Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        role: ShapeRole,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Pie slice; angles in radians, clockwise from the positive x axis.
    Wedge {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        end: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Path {
        data: PathData,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
        anchor: Anchor,
        /// Degrees, applied about `(x, y)`.
        rotation: Option<f64>,
        style: TextStyle,
    },
    Markup { markup: SanitizedMarkup },
}

impl Shape {
    /// Sweep of a wedge in radians.
    pub fn sweep(&self) -> Option<f64> {
        match self {
            Shape::Wedge { start, end, .. } => Some(end - start),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCmd {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadTo {
        cx: f64,
        cy: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// An SVG-compatible path built from commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathData {
    pub cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::MoveTo { x, y });
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::LineTo { x, y });
        self
    }

    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::QuadTo { cx, cy, x, y });
        self
    }

    pub fn smooth_quad_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::SmoothQuadTo { x, y });
        self
    }

    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.cmds.push(PathCmd::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// The `d` attribute string.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = match *cmd {
                PathCmd::MoveTo { x, y } => write!(d, "M {} {}", num(x), num(y)),
                PathCmd::LineTo { x, y } => write!(d, "L {} {}", num(x), num(y)),
                PathCmd::QuadTo { cx, cy, x, y } => {
                    write!(d, "Q {} {} {} {}", num(cx), num(cy), num(x), num(y))
                }
                PathCmd::SmoothQuadTo { x, y } => write!(d, "T {} {}", num(x), num(y)),
                PathCmd::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => write!(
                    d,
                    "C {} {} {} {} {} {}",
                    num(c1x),
                    num(c1y),
                    num(c2x),
                    num(c2y),
                    num(x),
                    num(y)
                ),
                PathCmd::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    d,
                    "A {} {} {} {} {} {} {}",
                    num(rx),
                    num(ry),
                    num(rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    num(x),
                    num(y)
                ),
                PathCmd::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Final pen position, if any command moved the pen.
    pub fn end_point(&self) -> Option<(f64, f64)> {
        self.cmds.iter().rev().find_map(|cmd| match *cmd {
            PathCmd::MoveTo { x, y }
            | PathCmd::LineTo { x, y }
            | PathCmd::QuadTo { x, y, .. }
            | PathCmd::SmoothQuadTo { x, y }
            | PathCmd::CubicTo { x, y, .. }
            | PathCmd::ArcTo { x, y, .. } => Some((x, y)),
            PathCmd::Close => None,
        })
    }
}

/// Format a coordinate the way a browser prints a number: integers
/// without a fractional part, everything else to at most three decimals.
pub fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
