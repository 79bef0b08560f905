//! Text metrics estimated from the font size alone.
//!
//! SVG has no automatic line breaking, so paragraphs are wrapped here
//! using an average glyph advance rather than real font metrics.

use poster_core::visual::TextStyle;

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.52;
const LINE_SPACING: f64 = 1.4;
const ELLIPSIS: &str = "...";

pub fn line_height(style: &TextStyle) -> f64 {
    style.size * LINE_SPACING
}

/// Height of `lines` lines of `style` text.
pub fn text_height(lines: usize, style: &TextStyle) -> f64 {
    lines as f64 * line_height(style)
}

/// The string as it is drawn: uppercased when the style asks for it.
pub fn display_text(text: &str, style: &TextStyle) -> String {
    if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

/// How many characters of `style` fit on one line `width` wide.
pub fn chars_per_line(width: f64, style: &TextStyle) -> usize {
    let advance = style.size * GLYPH_ADVANCE;
    if advance <= 0.0 || !width.is_finite() {
        return 1;
    }
    ((width / advance).floor() as usize).max(1)
}

/// Greedy word wrap of a single paragraph. An empty paragraph is one
/// empty line. Words longer than a line keep a line to themselves.
pub fn wrap(text: &str, width: f64, style: &TextStyle) -> Vec<String> {
    let limit = chars_per_line(width, style);
    let text = display_text(text, style);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current_len > 0 && current_len + 1 + len > limit {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += len;
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap every paragraph and apply the style's line clamp, marking a
/// clamped last line with an ellipsis.
pub fn wrap_paragraphs(paragraphs: &[String], width: f64, style: &TextStyle) -> Vec<String> {
    let mut lines: Vec<String> = paragraphs
        .iter()
        .flat_map(|p| wrap(p, width, style))
        .collect();

    if let Some(max) = style.line_clamp {
        let max = max as usize;
        if lines.len() > max {
            lines.truncate(max);
            if let Some(last) = lines.last_mut() {
                last.push_str(ELLIPSIS);
            }
        }
    }
    lines
}
