use poster_core::color::Color;
use poster_core::visual::TextStyle;
use poster_export::measure::{chars_per_line, wrap, wrap_paragraphs};

const STYLE: TextStyle = TextStyle::new("Arial", 10.0, Color::BLACK);

#[test]
fn wraps_on_word_boundaries() {
    // 52 units wide at 5.2 per glyph: ten characters per line.
    assert_eq!(chars_per_line(52.0, &STYLE), 10);
    let lines = wrap("alpha beta gamma delta", 52.0, &STYLE);
    assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
}

#[test]
fn empty_paragraph_is_one_empty_line() {
    assert_eq!(wrap("", 100.0, &STYLE), vec![String::new()]);
    let lines = wrap_paragraphs(&["a".to_string(), String::new(), "b".to_string()], 100.0, &STYLE);
    assert_eq!(lines.len(), 3);
}

#[test]
fn long_words_keep_their_own_line() {
    let lines = wrap("x supercalifragilistic y", 52.0, &STYLE);
    assert_eq!(lines, vec!["x", "supercalifragilistic", "y"]);
}

#[test]
fn uppercase_styles_are_uppercased() {
    let style = STYLE.uppercase();
    assert_eq!(wrap("methods", 500.0, &style), vec!["METHODS"]);
}

#[test]
fn clamp_truncates_with_an_ellipsis() {
    let style = STYLE.clamp(2);
    let paragraphs: Vec<String> = (0..5).map(|i| format!("line {i}")).collect();
    let lines = wrap_paragraphs(&paragraphs, 500.0, &style);
    assert_eq!(lines, vec!["line 0", "line 1..."]);
}

#[test]
fn degenerate_width_still_fits_one_glyph() {
    assert_eq!(chars_per_line(0.0, &STYLE), 1);
}
