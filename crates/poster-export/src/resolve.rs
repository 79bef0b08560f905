//! Resolves flowed placements into concrete rectangles.
//!
//! Absolute blocks keep their rectangle. Flowed children are stacked
//! along their parent's direction inside its padding: fixed extents
//! first, auto extents at their measured size, and fill extents sharing
//! what is left. The cross axis stretches unless a fixed size is given.

use poster_core::visual::{
    BlockKind, Direction, Extent, Placement, PosterTree, Rect, TextRun, VisualBlock,
};

use crate::measure::{text_height, wrap, wrap_paragraphs};

/// A block with its resolved rectangle, in poster coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub block: &'a VisualBlock,
    pub rect: Rect,
    pub children: Vec<Frame<'a>>,
}

impl Frame<'_> {
    /// Pre-order walk over this frame and its descendants.
    pub fn walk(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(frame) = stack.pop() {
            out.push(frame);
            stack.extend(frame.children.iter().rev());
        }
        out
    }
}

/// Resolve the header and the body of `tree`.
pub fn resolve_tree(tree: &PosterTree) -> [Frame<'_>; 2] {
    let canvas = Rect::new(0.0, 0.0, tree.canvas.width, tree.canvas.height);
    [
        resolve(&tree.header, top_level_rect(&tree.header, canvas)),
        resolve(&tree.body, top_level_rect(&tree.body, canvas)),
    ]
}

fn top_level_rect(block: &VisualBlock, canvas: Rect) -> Rect {
    block.placement.rect().unwrap_or(canvas)
}

/// Resolve `block` placed at `rect`.
pub fn resolve(block: &VisualBlock, rect: Rect) -> Frame<'_> {
    let content = inset(rect, block.style.padding);
    let gap = block.style.gap;

    let flowed: Vec<&VisualBlock> = block
        .children
        .iter()
        .filter(|c| matches!(c.placement, Placement::Flow { .. }))
        .collect();
    let mut flowed_rects = flow(&flowed, content, gap, block.style.direction).into_iter();

    let children = block
        .children
        .iter()
        .map(|child| {
            let child_rect = match child.placement {
                Placement::Absolute { rect } => rect,
                Placement::Flow { .. } => flowed_rects.next().unwrap_or(content),
            };
            resolve(child, child_rect)
        })
        .collect();

    Frame {
        block,
        rect,
        children,
    }
}

fn flow(children: &[&VisualBlock], content: Rect, gap: f64, direction: Direction) -> Vec<Rect> {
    let (main_avail, cross_avail) = match direction {
        Direction::Column => (content.h, content.w),
        Direction::Row => (content.w, content.h),
    };

    let tracks: Vec<Track> = children
        .iter()
        .map(|child| {
            let (width, height) = flow_extents(child);
            match direction {
                Direction::Column => {
                    let w = cross_size(width, cross_avail);
                    match height {
                        Extent::Fixed(h) => Track::Fixed(h),
                        Extent::Auto => Track::Fixed(measure(child, w)),
                        Extent::Fill => Track::Fill,
                    }
                }
                Direction::Row => match width {
                    Extent::Fixed(w) => Track::Fixed(w),
                    Extent::Auto | Extent::Fill => Track::Fill,
                },
            }
        })
        .collect();

    let sizes = distribute(&tracks, main_avail, gap);

    let mut cursor = 0.0;
    children
        .iter()
        .zip(sizes)
        .map(|(child, main)| {
            let (width, height) = flow_extents(child);
            let rect = match direction {
                Direction::Column => Rect::new(
                    content.x,
                    content.y + cursor,
                    cross_size(width, cross_avail),
                    main,
                ),
                Direction::Row => Rect::new(
                    content.x + cursor,
                    content.y,
                    main,
                    cross_size(height, cross_avail),
                ),
            };
            cursor += main + gap;
            rect
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Track {
    Fixed(f64),
    Fill,
}

/// Main-axis sizes: fixed tracks as given, fill tracks share the rest
/// equally, never below zero.
fn distribute(tracks: &[Track], avail: f64, gap: f64) -> Vec<f64> {
    let gaps = gap * tracks.len().saturating_sub(1) as f64;
    let fixed: f64 = tracks
        .iter()
        .map(|t| match t {
            Track::Fixed(v) => *v,
            Track::Fill => 0.0,
        })
        .sum();
    let fills = tracks.iter().filter(|t| matches!(t, Track::Fill)).count();
    let share = if fills > 0 {
        ((avail - fixed - gaps) / fills as f64).max(0.0)
    } else {
        0.0
    };

    tracks
        .iter()
        .map(|t| match t {
            Track::Fixed(v) => *v,
            Track::Fill => share,
        })
        .collect()
}

fn flow_extents(block: &VisualBlock) -> (Extent, Extent) {
    match block.placement {
        Placement::Flow { width, height } => (width, height),
        Placement::Absolute { rect } => (Extent::Fixed(rect.w), Extent::Fixed(rect.h)),
    }
}

fn cross_size(extent: Extent, avail: f64) -> f64 {
    match extent {
        Extent::Fixed(v) => v.min(avail),
        Extent::Auto | Extent::Fill => avail,
    }
}

/// `rect` shrunk by `by` on every side.
pub fn inset(rect: Rect, by: f64) -> Rect {
    Rect::new(
        rect.x + by,
        rect.y + by,
        (rect.w - 2.0 * by).max(0.0),
        (rect.h - 2.0 * by).max(0.0),
    )
}

/// Height a heading band takes at `width`, including its padding.
pub fn heading_height(heading: &TextRun, band_padding: f64, width: f64) -> f64 {
    let inner = (width - 2.0 * band_padding).max(0.0);
    let lines = wrap(&heading.text, inner, &heading.style).len();
    text_height(lines, &heading.style) + 2.0 * band_padding
}

/// Natural height of `block` when laid out `width` wide.
pub fn measure(block: &VisualBlock, width: f64) -> f64 {
    let padding = block.style.padding;
    let inner = (width - 2.0 * padding).max(0.0);

    let content = match &block.kind {
        BlockKind::TextSection {
            heading,
            heading_band,
            paragraphs,
            body,
            ..
        } => {
            let heading = heading.as_ref().map_or(0.0, |h| {
                let band_padding = heading_band.map_or(0.0, |b| b.padding);
                heading_height(h, band_padding, inner) + block.style.gap
            });
            heading + text_height(wrap_paragraphs(paragraphs, inner, body).len(), body)
        }
        BlockKind::Caption(run) => text_height(wrap(&run.text, inner, &run.style).len(), &run.style),
        BlockKind::Placeholder { lines } => {
            let text: f64 = lines
                .iter()
                .map(|run| text_height(wrap(&run.text, inner, &run.style).len(), &run.style))
                .sum();
            text + block.style.gap * lines.len().saturating_sub(1) as f64
        }
        BlockKind::ChartBlock(figure) => {
            let title = text_height(
                wrap(&figure.title.text, inner, &figure.title.style).len(),
                &figure.title.style,
            );
            title + block.style.gap + inner * figure.canvas.height / figure.canvas.width
        }
        _ => measure_children(block, inner),
    };

    content + 2.0 * padding
}

fn measure_children(block: &VisualBlock, inner: f64) -> f64 {
    let heights = block.children.iter().filter_map(|child| {
        let (width, height) = match child.placement {
            Placement::Flow { width, height } => (width, height),
            Placement::Absolute { .. } => return None,
        };
        Some(match height {
            Extent::Fixed(h) => h,
            Extent::Auto => measure(child, cross_size(width, inner)),
            Extent::Fill => 0.0,
        })
    });

    match block.style.direction {
        Direction::Column => {
            let mut count = 0usize;
            let total: f64 = heights.inspect(|_| count += 1).sum();
            total + block.style.gap * count.saturating_sub(1) as f64
        }
        Direction::Row => heights.fold(0.0, f64::max),
    }
}
