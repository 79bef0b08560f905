//! Slide-deck export.
//!
//! The deck does not consume the visual tree. Slide primitives (native
//! shapes, text boxes, chart objects) differ from vector paths, so the
//! plan is re-derived from the document in inches on a 48×36 slide.
//! Only the classic, standard and visual arrangements have a deck plan;
//! every other layout gets the header band alone.

use poster_core::color::Color;
use poster_core::models::chart::Chart;
use poster_core::models::document::PosterDocument;
use poster_core::models::layout::LayoutId;
use poster_core::models::theme::Theme;
use serde::Serialize;
use tracing::info;

use crate::error::ExportError;
use crate::page::{ExportArtifact, POSTER_PAGE, PageSize, deck_file_name};

pub const CHART_PLACEHOLDER: &str = "Chart Placeholder";
const SERIF_FACE: &str = "Times New Roman";
const SANS_FACE: &str = "Arial";
const CHART_GAP_PCT: u32 = 25;
const PLACEHOLDER_FILL: &str = "f3f4f6";
const PLACEHOLDER_LINE: &str = "cccccc";

/// Turns a plan into slide-deck bytes.
pub trait DeckBuilder: Send + Sync {
    fn build(&self, plan: &DeckPlan) -> Result<Vec<u8>, ExportError>;
}

/// A rectangle on the slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InchRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

const fn at(x: f64, y: f64, w: f64, h: f64) -> InchRect {
    InchRect { x, y, w, h }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBox {
    pub rect: InchRect,
    pub text: String,
    /// Points.
    pub font_size: Option<u32>,
    pub font_face: Option<&'static str>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub bold: bool,
    pub align: Option<DeckAlign>,
    pub valign_top: bool,
}

impl TextBox {
    fn new(text: impl Into<String>, rect: InchRect) -> Self {
        Self {
            rect,
            text: text.into(),
            font_size: None,
            font_face: None,
            color: None,
            fill: None,
            bold: false,
            align: None,
            valign_top: false,
        }
    }

    fn size(mut self, points: u32) -> Self {
        self.font_size = Some(points);
        self
    }

    fn face(mut self, face: &'static str) -> Self {
        self.font_face = Some(face);
        self
    }

    fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    fn fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn align(mut self, align: DeckAlign) -> Self {
        self.align = Some(align);
        self
    }

    fn top(mut self) -> Self {
        self.valign_top = true;
        self
    }
}

/// A native clustered column chart with one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnChart {
    pub rect: InchRect,
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub gap_width_pct: u32,
    pub color: String,
    pub show_values: bool,
    pub title_font_size: u32,
    pub title_color: String,
    pub value_axis_label: String,
    pub category_axis_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeckItem {
    Shape {
        rect: InchRect,
        fill: String,
        outline: Option<Outline>,
    },
    Text(TextBox),
    Chart(ColumnChart),
}

/// One slide, painted in item order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckPlan {
    pub slide: PageSize,
    pub layout: LayoutId,
    pub items: Vec<DeckItem>,
}

impl DeckPlan {
    pub fn texts(&self) -> impl Iterator<Item = &TextBox> {
        self.items.iter().filter_map(|item| match item {
            DeckItem::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = &ColumnChart> {
        self.items.iter().filter_map(|item| match item {
            DeckItem::Chart(chart) => Some(chart),
            _ => None,
        })
    }
}

/// Deck colors are bare hex without the leading `#`.
fn deck_color(color: Color) -> String {
    color.to_hex().trim_start_matches('#').to_string()
}

/// Times New Roman when the theme's heading font is a Times face,
/// otherwise Arial.
pub fn font_face(theme: &Theme) -> &'static str {
    if theme.fonts.heading.contains("Times") {
        SERIF_FACE
    } else {
        SANS_FACE
    }
}

struct Palette {
    primary: String,
    secondary: String,
    sidebar: String,
    text: String,
    title: String,
    accent: String,
    face: &'static str,
}

impl Palette {
    fn new(theme: &Theme) -> Self {
        let c = &theme.colors;
        Self {
            primary: deck_color(c.primary),
            secondary: deck_color(c.secondary),
            sidebar: deck_color(c.sidebar_background),
            text: deck_color(c.text),
            title: deck_color(c.sidebar_text),
            accent: deck_color(c.accent),
            face: font_face(theme),
        }
    }
}

struct Slide<'a> {
    doc: &'a PosterDocument,
    palette: Palette,
    items: Vec<DeckItem>,
}

impl Slide<'_> {
    fn shape(&mut self, rect: InchRect, fill: &str, outline: Option<Outline>) {
        self.items.push(DeckItem::Shape {
            rect,
            fill: fill.to_string(),
            outline,
        });
    }

    fn text(&mut self, text: TextBox) {
        self.items.push(DeckItem::Text(text));
    }

    fn header(&mut self) {
        let p = &self.palette;
        let title = TextBox::new(&self.doc.title, at(2.0, 0.5, 44.0, 2.0))
            .size(72)
            .color(&p.title)
            .bold()
            .align(DeckAlign::Center)
            .face(p.face);
        let authors = TextBox::new(&self.doc.authors, at(2.0, 2.5, 44.0, 1.0))
            .size(36)
            .color(&p.title)
            .align(DeckAlign::Center)
            .face(p.face);
        let affiliation = TextBox::new(&self.doc.affiliation, at(2.0, 3.5, 44.0, 1.0))
            .size(28)
            .color(&p.title)
            .align(DeckAlign::Center)
            .face(p.face);

        let band = p.primary.clone();
        self.shape(at(0.0, 0.0, 48.0, 5.0), &band, None);
        self.text(title);
        self.text(authors);
        self.text(affiliation);
    }

    /// A one-inch heading strip over a white body box `h - 1` tall.
    fn section(&mut self, title: &str, text: &str, rect: InchRect) {
        let p = &self.palette;
        let heading = TextBox::new(title, at(rect.x, rect.y, rect.w, 1.0))
            .size(28)
            .bold()
            .align(DeckAlign::Center)
            .face(p.face)
            .fill(&p.secondary)
            .color(&p.primary);
        let body = TextBox::new(text, at(rect.x, rect.y + 1.0, rect.w, rect.h - 1.0))
            .size(18)
            .align(DeckAlign::Left)
            .top()
            .face(p.face)
            .fill("ffffff")
            .color(&p.text);
        self.text(heading);
        self.text(body);
    }

    fn chart(&mut self, rect: InchRect) {
        let doc = self.doc;
        match doc.chart.as_ref().filter(|c| !c.is_empty()) {
            Some(chart) => {
                let native = column_chart(chart, &self.palette, rect);
                self.items.push(DeckItem::Chart(native));
            }
            None => {
                self.shape(
                    rect,
                    PLACEHOLDER_FILL,
                    Some(Outline {
                        color: PLACEHOLDER_LINE.to_string(),
                        width: 1.0,
                    }),
                );
                self.text(
                    TextBox::new(CHART_PLACEHOLDER, at(rect.x, rect.y + rect.h / 2.0, rect.w, 1.0))
                        .align(DeckAlign::Center),
                );
            }
        }
    }
}

fn column_chart(chart: &Chart, palette: &Palette, rect: InchRect) -> ColumnChart {
    ColumnChart {
        rect,
        title: chart.title.clone(),
        categories: chart.data.iter().map(|p| p.label.clone()).collect(),
        values: chart.data.iter().map(|p| p.value).collect(),
        gap_width_pct: CHART_GAP_PCT,
        color: palette.accent.clone(),
        show_values: true,
        title_font_size: 18,
        title_color: palette.primary.clone(),
        value_axis_label: chart.y_axis_label.clone(),
        category_axis_label: chart.x_axis_label.clone(),
    }
}

/// Derive the slide plan for `doc` under `theme` and `layout`.
pub fn plan_deck(doc: &PosterDocument, theme: &Theme, layout: LayoutId) -> DeckPlan {
    let mut slide = Slide {
        doc,
        palette: Palette::new(theme),
        items: Vec::new(),
    };
    slide.header();

    match layout {
        LayoutId::Classic => classic(&mut slide),
        LayoutId::Standard => standard(&mut slide),
        LayoutId::Visual => visual(&mut slide),
        LayoutId::Cycle | LayoutId::Geometric | LayoutId::Research => {}
    }

    DeckPlan {
        slide: POSTER_PAGE,
        layout,
        items: slide.items,
    }
}

fn classic(slide: &mut Slide<'_>) {
    let doc = slide.doc;
    let sidebar = slide.palette.sidebar.clone();
    let ink = slide.palette.title.clone();

    slide.shape(at(0.0, 5.0, 10.0, 31.0), &sidebar, None);
    slide.text(
        TextBox::new("ABSTRACT", at(0.5, 6.0, 9.0, 1.0))
            .size(24)
            .color(&ink)
            .bold()
            .align(DeckAlign::Center),
    );
    slide.text(
        TextBox::new(&doc.abstract_text, at(0.5, 7.2, 9.0, 10.0))
            .size(16)
            .color(&ink)
            .top(),
    );
    slide.text(
        TextBox::new("CONTACT", at(0.5, 25.0, 9.0, 1.0))
            .size(24)
            .color(&ink)
            .bold()
            .align(DeckAlign::Center),
    );
    slide.text(
        TextBox::new(
            format!("{}\n{}\n{}", doc.contact_name, doc.contact_org, doc.contact_email),
            at(0.5, 26.2, 9.0, 5.0),
        )
        .size(16)
        .color(&ink)
        .top(),
    );

    let (col_w, start_x, gap) = (12.0, 10.5, 0.5);
    let col = |i: f64| start_x + (col_w + gap) * i;

    slide.section("INTRODUCTION", &doc.introduction, at(col(0.0), 6.0, col_w, 10.0));
    slide.section("METHODS", &doc.methods, at(col(0.0), 17.0, col_w, 10.0));
    slide.section("RESULTS", &doc.results, at(col(1.0), 6.0, col_w, 15.0));
    slide.chart(at(col(1.0), 22.0, col_w, 8.0));
    slide.section("DISCUSSION", &doc.discussion, at(col(2.0), 6.0, col_w, 8.0));
    slide.section("CONCLUSIONS", &doc.conclusions, at(col(2.0), 15.0, col_w, 6.0));
    slide.section("REFERENCES", &doc.references, at(col(2.0), 22.0, col_w, 8.0));
}

fn standard(slide: &mut Slide<'_>) {
    let doc = slide.doc;
    let (col_w, start_x, gap) = (15.0, 1.0, 1.0);
    let col = |i: f64| start_x + (col_w + gap) * i;

    slide.section("ABSTRACT", &doc.abstract_text, at(col(0.0), 6.0, col_w, 8.0));
    slide.section("INTRODUCTION", &doc.introduction, at(col(0.0), 15.0, col_w, 10.0));
    slide.section("METHODS", &doc.methods, at(col(0.0), 26.0, col_w, 9.0));

    slide.section("RESULTS", &doc.results, at(col(1.0), 6.0, col_w, 12.0));
    slide.chart(at(col(1.0), 19.0, col_w, 10.0));
    slide.section("DISCUSSION", &doc.discussion, at(col(1.0), 30.0, col_w, 5.0));

    slide.section("CONCLUSIONS", &doc.conclusions, at(col(2.0), 6.0, col_w, 8.0));
    slide.section("REFERENCES", &doc.references, at(col(2.0), 15.0, col_w, 10.0));

    let secondary = slide.palette.secondary.clone();
    let primary = slide.palette.primary.clone();
    slide.shape(at(col(2.0), 26.0, col_w, 5.0), &secondary, None);
    slide.text(
        TextBox::new("CONTACT", at(col(2.0), 26.5, col_w, 1.0))
            .align(DeckAlign::Center)
            .bold()
            .color(&primary),
    );
    slide.text(
        TextBox::new(
            format!("{}\n{}", doc.contact_name, doc.contact_email),
            at(col(2.0), 28.0, col_w, 2.0),
        )
        .align(DeckAlign::Center),
    );
}

fn visual(slide: &mut Slide<'_>) {
    let doc = slide.doc;
    let (side_w, center_w, gap, start_x) = (11.0, 22.0, 1.0, 1.0);
    let center_x = start_x + side_w + gap;
    let right_x = center_x + center_w + gap;

    slide.section("ABSTRACT", &doc.abstract_text, at(start_x, 6.0, side_w, 8.0));
    slide.section("INTRODUCTION", &doc.introduction, at(start_x, 15.0, side_w, 10.0));
    slide.section("METHODS", &doc.methods, at(start_x, 26.0, side_w, 9.0));

    slide.chart(at(center_x, 6.0, center_w, 12.0));
    slide.section("RESULTS & ANALYSIS", &doc.results, at(center_x, 19.0, center_w, 16.0));

    slide.section("DISCUSSION", &doc.discussion, at(right_x, 6.0, side_w, 10.0));
    slide.section("CONCLUSIONS", &doc.conclusions, at(right_x, 17.0, side_w, 8.0));
    slide.section("REFERENCES", &doc.references, at(right_x, 26.0, side_w, 9.0));
}

/// Plan and build the deck, named `SciencePoster_<layout>.pptx`.
pub fn export_deck(
    doc: &PosterDocument,
    theme: &Theme,
    layout: LayoutId,
    builder: &dyn DeckBuilder,
) -> Result<ExportArtifact, ExportError> {
    let plan = plan_deck(doc, theme, layout);
    let bytes = builder.build(&plan)?;
    info!(
        layout = %layout,
        theme = theme.id,
        items = plan.items.len(),
        bytes = bytes.len(),
        "exported slide deck"
    );
    Ok(ExportArtifact {
        file_name: deck_file_name(layout),
        bytes,
    })
}
