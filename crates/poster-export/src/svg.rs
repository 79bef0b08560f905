//! SVG serialization of a [`PosterTree`].
//!
//! The output is a standalone SVG document on the logical canvas; it is
//! what the PDF rasterizer draws. All text is escaped and the only raw
//! markup embedded is [`SanitizedMarkup`](poster_core::sanitize::SanitizedMarkup)
//! from generic visuals.

use std::f64::consts::TAU;
use std::fmt::Write as _;

use poster_core::color::Color;
use poster_core::sanitize::escape_xml;
use poster_core::visual::{
    Anchor, BlockKind, BlockStyle, ChartFigure, Overlay, PathData, PosterTree, Rect, Shape,
    Sides, Stroke, TextAlign, TextRun, TextStyle, num,
};

use crate::measure::{display_text, line_height, text_height, wrap, wrap_paragraphs};
use crate::resolve::{Frame, heading_height, inset, resolve_tree};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `tree` into a standalone SVG document.
pub fn to_svg(tree: &PosterTree) -> String {
    let mut w = SvgWriter::default();
    let (width, height) = (num(tree.canvas.width), num(tree.canvas.height));

    w.raw(&format!(
        r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    w.raw(&format!(
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        tree.background
    ));

    let [header, body] = resolve_tree(tree);
    w.frame(&body);
    w.frame(&header);

    w.raw("</svg>");
    w.out
}

#[derive(Default)]
struct SvgWriter {
    out: String,
    markers: usize,
}

impl SvgWriter {
    fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn frame(&mut self, frame: &Frame<'_>) {
        let block = frame.block;
        let rect = frame.rect;
        self.decoration(rect, &block.style);
        let content = inset(rect, block.style.padding);

        match &block.kind {
            BlockKind::TitleBlock {
                title,
                authors,
                affiliation,
            } => self.stacked_runs(&[title, authors, affiliation], content, block.style.gap),
            BlockKind::LogoBox { label } => self.stacked_runs(&[label], content, 0.0),
            BlockKind::Placeholder { lines } => {
                let runs: Vec<&TextRun> = lines.iter().collect();
                self.stacked_runs(&runs, content, block.style.gap);
            }
            BlockKind::Caption(run) => {
                let lines = wrap(&run.text, content.w, &run.style);
                self.text_lines(&lines, content, content.y, &run.style);
            }
            BlockKind::DecorativeOverlay(overlay) => self.overlay(overlay, rect),
            BlockKind::TextSection {
                heading,
                heading_band,
                paragraphs,
                body,
                ..
            } => {
                let mut top = content.y;
                if let Some(heading) = heading {
                    let band_padding = heading_band.map_or(0.0, |b| b.padding);
                    let band_height = heading_height(heading, band_padding, content.w);
                    let band_rect = Rect::new(content.x, top, content.w, band_height);
                    if let Some(band) = heading_band {
                        self.decoration(
                            band_rect,
                            &BlockStyle {
                                background: band.background,
                                border: band.border,
                                ..BlockStyle::default()
                            },
                        );
                    }
                    let text_area = inset(band_rect, band_padding);
                    let lines = wrap(&heading.text, text_area.w, &heading.style);
                    self.text_lines(&lines, text_area, text_area.y, &heading.style);
                    top += band_height + block.style.gap;
                }
                let lines = wrap_paragraphs(paragraphs, content.w, body);
                self.text_lines(&lines, content, top, body);
            }
            BlockKind::ChartBlock(figure) => self.chart(figure, content, block.style.gap),
            BlockKind::Arrow { path, stroke, head } => self.arrow(path, *stroke, *head, rect),
            BlockKind::Header
            | BlockKind::Sidebar
            | BlockKind::Column
            | BlockKind::Region
            | BlockKind::Frame => {}
        }

        for child in &frame.children {
            self.frame(child);
        }
    }

    fn decoration(&mut self, rect: Rect, style: &BlockStyle) {
        if let Some(background) = style.background {
            let _ = write!(
                self.out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{background}"/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.w),
                num(rect.h),
                num(style.corner_radius),
            );
        }

        let Some(border) = style.border else {
            return;
        };
        let half = border.width / 2.0;
        let dash = if border.dashed {
            format!(r#" stroke-dasharray="{} {}""#, num(border.width * 3.0), num(border.width * 2.0))
        } else {
            String::new()
        };
        let stroke = format!(
            r#"stroke="{}" stroke-width="{}"{dash}"#,
            border.color,
            num(border.width)
        );

        let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {stroke}/>"#,
                num(x1),
                num(y1),
                num(x2),
                num(y2)
            )
        };
        let element = match border.sides {
            Sides::All => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" {stroke}/>"#,
                num(rect.x + half),
                num(rect.y + half),
                num((rect.w - border.width).max(0.0)),
                num((rect.h - border.width).max(0.0)),
                num(style.corner_radius),
            ),
            Sides::Top => line(rect.x, rect.y + half, rect.right(), rect.y + half),
            Sides::Bottom => line(rect.x, rect.bottom() - half, rect.right(), rect.bottom() - half),
            Sides::Left => line(rect.x + half, rect.y, rect.x + half, rect.bottom()),
            Sides::Right => line(rect.right() - half, rect.y, rect.right() - half, rect.bottom()),
        };
        self.out.push_str(&element);
    }

    /// Runs stacked top to bottom and centred vertically in `area`.
    fn stacked_runs(&mut self, runs: &[&TextRun], area: Rect, gap: f64) {
        let wrapped: Vec<Vec<String>> = runs
            .iter()
            .map(|run| wrap(&run.text, area.w, &run.style))
            .collect();
        let total: f64 = runs
            .iter()
            .zip(&wrapped)
            .map(|(run, lines)| text_height(lines.len(), &run.style))
            .sum::<f64>()
            + gap * runs.len().saturating_sub(1) as f64;

        let mut top = area.y + ((area.h - total) / 2.0).max(0.0);
        for (run, lines) in runs.iter().zip(&wrapped) {
            self.text_lines(lines, area, top, &run.style);
            top += text_height(lines.len(), &run.style) + gap;
        }
    }

    /// Pre-wrapped lines starting at `top`, aligned within `area`.
    fn text_lines(&mut self, lines: &[String], area: Rect, top: f64, style: &TextStyle) {
        let (x, anchor) = match style.align {
            TextAlign::Left | TextAlign::Justify => (area.x, Anchor::Start),
            TextAlign::Center => (area.x + area.w / 2.0, Anchor::Middle),
            TextAlign::Right => (area.right(), Anchor::End),
        };
        let lh = line_height(style);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = top + lh * i as f64 + style.size;
            self.text(x, baseline, line, anchor, None, style);
        }
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        anchor: Anchor,
        rotation: Option<f64>,
        style: &TextStyle,
    ) {
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}""#,
            num(x),
            num(y),
            escape_xml(style.family),
            num(style.size),
            style.weight.css(),
            style.color,
        );
        if style.italic {
            self.out.push_str(r#" font-style="italic""#);
        }
        match anchor {
            Anchor::Start => {}
            Anchor::Middle => self.out.push_str(r#" text-anchor="middle""#),
            Anchor::End => self.out.push_str(r#" text-anchor="end""#),
        }
        if let Some(deg) = rotation {
            let _ = write!(
                self.out,
                r#" transform="rotate({} {} {})""#,
                num(deg),
                num(x),
                num(y)
            );
        }
        let _ = write!(self.out, ">{}</text>", escape_xml(text));
    }

    fn overlay(&mut self, overlay: &Overlay, rect: Rect) {
        let scale = if overlay.view_box > 0.0 {
            rect.w / overlay.view_box
        } else {
            1.0
        };
        let _ = write!(
            self.out,
            r#"<g transform="translate({} {}) scale({})" opacity="{}">"#,
            num(rect.x),
            num(rect.y),
            num(scale),
            num(overlay.opacity)
        );
        for shape in &overlay.shapes {
            self.shape(shape);
        }
        self.out.push_str("</g>");
    }

    /// Title above, then the chart canvas scaled to fit what remains.
    fn chart(&mut self, figure: &ChartFigure, area: Rect, gap: f64) {
        let title_lines = wrap(&figure.title.text, area.w, &figure.title.style);
        self.text_lines(&title_lines, area, area.y, &figure.title.style);

        let title_height = text_height(title_lines.len(), &figure.title.style) + gap;
        let plot = Rect::new(
            area.x,
            area.y + title_height,
            area.w,
            (area.h - title_height).max(0.0),
        );
        let scale = (plot.w / figure.canvas.width).min(plot.h / figure.canvas.height);
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }
        let dx = plot.x + (plot.w - figure.canvas.width * scale) / 2.0;
        let dy = plot.y;

        let _ = write!(
            self.out,
            r#"<g transform="translate({} {}) scale({})">"#,
            num(dx),
            num(dy),
            num(scale)
        );
        for shape in &figure.elements {
            match shape {
                Shape::Markup { markup } => {
                    let _ = write!(
                        self.out,
                        r#"<svg x="0" y="0" width="{}" height="{}">{markup}</svg>"#,
                        num(figure.canvas.width),
                        num(figure.canvas.height)
                    );
                }
                other => self.shape(other),
            }
        }
        self.out.push_str("</g>");
    }

    fn arrow(&mut self, path: &PathData, stroke: Stroke, head: Color, rect: Rect) {
        self.markers += 1;
        let id = format!("arrowhead-{}", self.markers);
        let _ = write!(
            self.out,
            r#"<defs><marker id="{id}" viewBox="0 0 10 10" refX="5" refY="5" markerWidth="3" markerHeight="3" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 Z" fill="{head}"/></marker></defs>"#
        );
        let _ = write!(
            self.out,
            r#"<path d="{}" transform="translate({} {})" fill="none" {} marker-end="url(#{id})"/>"#,
            path.to_svg(),
            num(rect.x),
            num(rect.y),
            stroke_attrs(&stroke)
        );
    }

    fn shape(&mut self, shape: &Shape) {
        let _ = match shape {
            Shape::Rect {
                rect, fill, stroke, ..
            } => write!(
                self.out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.w),
                num(rect.h),
                paint(*fill, stroke.as_ref())
            ),
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => write!(
                self.out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2),
                stroke_attrs(stroke)
            ),
            Shape::Polyline { points, stroke } => {
                let points: Vec<String> = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                    .collect();
                write!(
                    self.out,
                    r#"<polyline points="{}" fill="none" {}/>"#,
                    points.join(" "),
                    stroke_attrs(stroke)
                )
            }
            Shape::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => write!(
                self.out,
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                num(*cx),
                num(*cy),
                num(*r),
                paint(*fill, stroke.as_ref())
            ),
            Shape::Wedge {
                cx,
                cy,
                r,
                start,
                end,
                fill,
                stroke,
            } => {
                let sweep = end - start;
                if sweep >= TAU - 1e-9 {
                    write!(
                        self.out,
                        r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                        num(*cx),
                        num(*cy),
                        num(*r),
                        paint(Some(*fill), stroke.as_ref())
                    )
                } else {
                    write!(
                        self.out,
                        r#"<path d="{}" {}/>"#,
                        wedge_path(*cx, *cy, *r, *start, *end).to_svg(),
                        paint(Some(*fill), stroke.as_ref())
                    )
                }
            }
            Shape::Path { data, fill, stroke } => write!(
                self.out,
                r#"<path d="{}" {}/>"#,
                data.to_svg(),
                paint(*fill, stroke.as_ref())
            ),
            Shape::Label {
                x,
                y,
                text,
                anchor,
                rotation,
                style,
            } => {
                self.text(*x, *y, &display_text(text, style), *anchor, *rotation, style);
                Ok(())
            }
            Shape::Markup { markup } => write!(self.out, "{markup}"),
        };
    }
}

/// Pie slice outline: centre, out along `start`, arc to `end`, back.
pub fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> PathData {
    let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
    let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = end - start > std::f64::consts::PI;
    PathData::new()
        .move_to(cx, cy)
        .line_to(x0, y0)
        .arc_to(r, r, 0.0, large_arc, true, x1, y1)
        .close()
}

fn paint(fill: Option<Color>, stroke: Option<&Stroke>) -> String {
    let mut attrs = match fill {
        Some(color) => format!(r#"fill="{color}""#),
        None => r#"fill="none""#.to_string(),
    };
    if let Some(stroke) = stroke {
        attrs.push(' ');
        attrs.push_str(&stroke_attrs(stroke));
    }
    attrs
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}""#,
        stroke.color,
        num(stroke.width)
    );
    if stroke.round {
        attrs.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
    }
    attrs
}
