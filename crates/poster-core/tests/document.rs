use poster_core::models::chart::{Chart, ChartKind, DataPoint};
use poster_core::models::document::{PosterDocument, TextField};
use poster_core::models::generation::GeneratedContent;

#[test]
fn initial_document_has_starter_content() {
    let doc = PosterDocument::initial();
    assert_eq!(doc.title, "PROJECT TITLE GOES HERE");

    let chart = doc.chart.expect("initial document has a chart");
    assert_eq!(chart.kind, ChartKind::Bar);
    let values: Vec<f64> = chart.data.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![15.0, 45.0, 32.0, 88.0]);
    assert_eq!(chart.data[0].label, "Control");
}

#[test]
fn references_are_two_lines() {
    let doc = PosterDocument::initial();
    assert_eq!(doc.references.split('\n').count(), 2);
    assert!(doc.references.starts_with("1. Author A."));
}

#[test]
fn blank_document_has_empty_fields_and_no_chart() {
    let doc = PosterDocument::blank();
    for field in TextField::ALL {
        assert_eq!(doc.field(field), "", "{field} should be empty");
    }
    assert!(doc.chart.is_none());
}

#[test]
fn field_mut_writes_through() {
    let mut doc = PosterDocument::blank();
    *doc.field_mut(TextField::ContactEmail) = "a@b.org".to_string();
    assert_eq!(doc.contact_email, "a@b.org");
    assert_eq!(doc.field(TextField::ContactEmail), "a@b.org");
}

#[test]
fn text_field_keys_round_trip() {
    for field in TextField::ALL {
        let parsed: TextField = field.key().parse().unwrap();
        assert_eq!(parsed, field);
    }
    assert!("resultsChart".parse::<TextField>().is_err());
}

#[test]
fn document_serializes_with_original_keys() {
    let doc = PosterDocument::initial();
    let json = serde_json::to_value(&doc).unwrap();
    assert!(json.get("abstract").is_some());
    assert!(json.get("contactName").is_some());
    assert_eq!(json["resultsChart"]["type"], "bar");
    assert_eq!(json["resultsChart"]["xAxisLabel"], "Test Groups");

    let back: PosterDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn merge_overwrites_only_generated_fields() {
    let mut doc = PosterDocument::initial();
    let generated: GeneratedContent = serde_json::from_str(
        r#"{"title": "Soil pH and Radish Growth", "abstract": "We grew radishes."}"#,
    )
    .unwrap();

    doc.merge(generated);

    assert_eq!(doc.title, "Soil pH and Radish Growth");
    assert_eq!(doc.abstract_text, "We grew radishes.");
    assert_eq!(doc.contact_name, "Your Name");
    assert_eq!(doc.chart, PosterDocument::initial().chart);
}

#[test]
fn merge_replaces_chart_with_complete_visual() {
    let mut doc = PosterDocument::blank();
    let generated: GeneratedContent = serde_json::from_str(
        r#"{
            "title": "T",
            "resultsVisual": {
                "type": "line",
                "title": "Growth",
                "xAxisLabel": "Day",
                "yAxisLabel": "cm",
                "data": [{"label": "1", "value": 0.5}, {"label": "2", "value": 1.25}]
            }
        }"#,
    )
    .unwrap();

    doc.merge(generated);

    let chart = doc.chart.unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.data.len(), 2);
    assert_eq!(chart.y_axis_label, "cm");
}

#[test]
fn merge_keeps_chart_when_visual_is_unusable() {
    let mut doc = PosterDocument::initial();
    let before = doc.chart.clone();
    let generated: GeneratedContent = serde_json::from_str(
        r#"{"resultsVisual": {"type": "scatter", "title": "x", "data": [{"label": "a", "value": 1}]}}"#,
    )
    .unwrap();

    doc.merge(generated);
    assert_eq!(doc.chart, before);
}

#[test]
fn starter_chart_matches_editor_default() {
    let chart = Chart::starter();
    assert_eq!(chart.title, "Analysis Results");
    assert_eq!(
        chart.data,
        vec![DataPoint::new("A", 10.0), DataPoint::new("B", 20.0)]
    );
    assert!(!chart.is_empty());
}
