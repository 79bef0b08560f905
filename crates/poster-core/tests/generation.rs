use poster_core::models::chart::ChartKind;
use poster_core::models::document::TextField;
use poster_core::models::generation::{GeneratedContent, GeneratedVisual};

#[test]
fn parses_flat_model_output() {
    let content: GeneratedContent = serde_json::from_str(
        r#"{
            "title": "Title",
            "abstract": "Abstract",
            "introduction": "Intro",
            "methods": "Methods",
            "results": "Results",
            "conclusions": "Done",
            "contactEmail": null,
            "confidence": 0.9
        }"#,
    )
    .unwrap();

    assert_eq!(content.get(TextField::Abstract), Some("Abstract"));
    assert_eq!(content.get(TextField::ContactEmail), None);
    assert_eq!(content.fields.len(), 6);
}

#[test]
fn missing_lists_absent_required_fields() {
    let content: GeneratedContent =
        serde_json::from_str(r#"{"title": "T", "methods": "M"}"#).unwrap();
    let missing = content.missing(&[TextField::Title, TextField::Abstract, TextField::Methods]);
    assert_eq!(missing, vec![TextField::Abstract]);
}

#[test]
fn serialized_content_reads_back() {
    let content: GeneratedContent =
        serde_json::from_str(r#"{"title": "T", "references": "R"}"#).unwrap();
    let json = serde_json::to_string(&content).unwrap();
    let back: GeneratedContent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, content);
}

#[test]
fn visual_kinds_are_case_insensitive() {
    let visual = GeneratedVisual {
        kind: " Pie ".to_string(),
        ..Default::default()
    };
    assert_eq!(visual.chart_kind(), Some(ChartKind::Pie));
}

#[test]
fn data_visual_without_points_is_dropped() {
    let visual = GeneratedVisual {
        kind: "bar".to_string(),
        title: "Empty".to_string(),
        ..Default::default()
    };
    assert!(visual.into_chart().is_none());
}

#[test]
fn generic_visual_keeps_markup() {
    let visual = GeneratedVisual {
        kind: "generic-svg".to_string(),
        title: "Setup".to_string(),
        svg_content: Some("<svg><rect width=\"1\" height=\"1\"/></svg>".to_string()),
        ..Default::default()
    };
    let chart = visual.into_chart().unwrap();
    assert_eq!(chart.kind, ChartKind::Generic);
    assert!(chart.data.is_empty());
    assert!(chart.svg_content.is_some());
}
