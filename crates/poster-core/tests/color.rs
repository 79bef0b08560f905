use poster_core::color::Color;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::from_hex("#4a5d23").unwrap(), Color::rgb(0x4a, 0x5d, 0x23));
    assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
    assert_eq!(Color::from_hex("#00000080").unwrap().a, 0x80);
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn displays_css_strings() {
    assert_eq!(Color::rgb(0x0f, 0x4c, 0x81).to_string(), "#0f4c81");
    assert_eq!(Color::WHITE.with_alpha(0.1).to_string(), "rgba(255,255,255,0.102)");
}

#[test]
fn parses_rgba_back() {
    let c: Color = "rgba(255, 255, 255, 0.2)".parse().unwrap();
    assert_eq!(c, Color::WHITE.with_alpha(0.2));
}

#[test]
fn serializes_as_string() {
    let json = serde_json::to_string(&Color::GRAY_200).unwrap();
    assert_eq!(json, "\"#e5e7eb\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::GRAY_200);
}
