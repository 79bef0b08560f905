use poster_bedrock::prompt::{SYSTEM_PROMPT, render_user_prompt};

#[test]
fn prompt_embeds_notes_and_poster_size() {
    let prompt = render_user_prompt("  radish growth under LED light  ").unwrap();
    assert!(prompt.contains("\"\"\"\nradish growth under LED light\n\"\"\""));
    assert!(prompt.contains("48x36 inch poster"));
}

#[test]
fn prompt_lists_required_and_optional_fields() {
    let prompt = render_user_prompt("notes").unwrap();
    assert!(prompt.contains("- \"title\" (required)"));
    assert!(prompt.contains("- \"conclusions\" (required)"));
    assert!(prompt.contains("- \"references\" (optional)"));
    assert!(prompt.contains("\"resultsVisual\""));
    assert!(prompt.contains("\"methodsVisual\""));
}

#[test]
fn notes_are_not_html_escaped() {
    let prompt = render_user_prompt("pH < 7 & \"acidic\"").unwrap();
    assert!(prompt.contains("pH < 7 & \"acidic\""));
}

#[test]
fn system_prompt_asks_for_json() {
    assert!(SYSTEM_PROMPT.contains("JSON"));
}
