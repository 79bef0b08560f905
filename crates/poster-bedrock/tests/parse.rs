use poster_bedrock::error::GenerationError;
use poster_bedrock::parse::{extract_json, parse_generated};
use poster_core::models::chart::ChartKind;
use poster_core::models::document::{PosterDocument, TextField};

const COMPLETE: &str = r#"{
    "title": "Effect of Salinity on Seed Germination",
    "authors": "A. Student",
    "abstract": "We tested five salt concentrations.",
    "introduction": "Soil salinity is rising.",
    "methods": "Seeds were soaked for 24 hours.",
    "results": "Germination fell with salinity.",
    "conclusions": "Salt inhibits germination.",
    "resultsVisual": {
        "type": "bar",
        "title": "Germination Rate",
        "xAxisLabel": "NaCl (mM)",
        "yAxisLabel": "Germinated (%)",
        "data": [{"label": "0", "value": 92}, {"label": "50", "value": 71}]
    }
}"#;

#[test]
fn plain_json_passes_through() {
    assert_eq!(extract_json("  {\"a\": 1} \n"), "{\"a\": 1}");
}

#[test]
fn fenced_json_is_unwrapped() {
    let text = format!("```json\n{COMPLETE}\n```");
    assert_eq!(extract_json(&text), COMPLETE.trim());

    let bare = "```\n{\"x\": 2}\n```";
    assert_eq!(extract_json(bare), "{\"x\": 2}");
}

#[test]
fn surrounding_prose_is_dropped() {
    let text = "Here is your poster:\n{\"title\": \"T\"}\nGood luck!";
    assert_eq!(extract_json(text), "{\"title\": \"T\"}");
}

#[test]
fn complete_response_parses_and_merges() {
    let content = parse_generated(COMPLETE).unwrap();
    assert_eq!(content.get(TextField::Authors), Some("A. Student"));
    assert_eq!(content.get(TextField::Discussion), None);

    let mut doc = PosterDocument::initial();
    doc.merge(content);
    assert_eq!(doc.title, "Effect of Salinity on Seed Germination");
    assert_eq!(doc.discussion, PosterDocument::initial().discussion);
    let chart = doc.chart.unwrap();
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.data[0].value, 92.0);
}

#[test]
fn missing_required_field_is_a_schema_violation() {
    let err = parse_generated(r#"{"title": "T", "abstract": "A"}"#).unwrap_err();
    match err {
        GenerationError::SchemaViolation(msg) => {
            assert!(msg.contains("introduction"));
            assert!(msg.contains("conclusions"));
            assert!(!msg.contains("abstract"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_json_is_a_schema_violation() {
    let err = parse_generated("I cannot help with that.").unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
    assert!(err.is_retryable());
}

#[test]
fn empty_reply_is_a_parse_error() {
    assert!(matches!(
        parse_generated("   "),
        Err(GenerationError::ResponseParse(_))
    ));
}
