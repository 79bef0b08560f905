use poster_core::models::chart::{ChartKind, DataPoint};
use poster_core::models::document::{PosterDocument, TextField};
use poster_core::models::generation::{GeneratedContent, GeneratedVisual};
use poster_core::models::layout::LayoutId;
use poster_studio::error::StoreError;
use poster_studio::store::{ChartText, DocumentStore};

fn chartless() -> DocumentStore {
    let mut store = DocumentStore::default();
    store.remove_chart();
    store
}

#[test]
fn starts_with_the_starter_poster() {
    let store = DocumentStore::default();
    assert_eq!(store.document(), &PosterDocument::initial());
    assert_eq!(store.theme().id, "eco");
    assert_eq!(store.layout(), LayoutId::Classic);
    assert_eq!(store.revision(), 0);
}

#[test]
fn text_edits_land_in_the_named_field() {
    let mut store = DocumentStore::default();
    store.set_field(TextField::Methods, "Timed 40 typists at three tempos.");
    assert_eq!(
        store.document().field(TextField::Methods),
        "Timed 40 typists at three tempos."
    );
    assert_eq!(store.revision(), 1);
}

#[test]
fn every_mutation_bumps_the_revision() {
    let mut store = DocumentStore::default();
    let before = store.updated_at();

    store.select_layout(LayoutId::Research);
    store.select_theme("slate").unwrap();
    store.add_chart();
    store.set_chart_kind(ChartKind::Pie).unwrap();

    assert_eq!(store.revision(), 4);
    assert!(store.updated_at() >= before);
}

#[test]
fn add_chart_replaces_with_the_starter() {
    let mut store = chartless();
    store.add_chart();

    let chart = store.document().chart.as_ref().unwrap();
    assert_eq!(chart.title, "Analysis Results");
    assert_eq!(
        chart.data,
        vec![DataPoint::new("A", 10.0), DataPoint::new("B", 20.0)]
    );
}

#[test]
fn chart_text_and_kind_edits() {
    let mut store = DocumentStore::default();
    store.set_chart_text(ChartText::Title, "Words per minute").unwrap();
    store.set_chart_text(ChartText::XAxisLabel, "Tempo").unwrap();
    store.set_chart_text(ChartText::YAxisLabel, "WPM").unwrap();
    store.set_chart_kind(ChartKind::Line).unwrap();

    let chart = store.document().chart.as_ref().unwrap();
    assert_eq!(chart.title, "Words per minute");
    assert_eq!(chart.x_axis_label, "Tempo");
    assert_eq!(chart.y_axis_label, "WPM");
    assert_eq!(chart.kind, ChartKind::Line);
}

#[test]
fn point_edits() {
    let mut store = DocumentStore::default();
    let index = store.add_point().unwrap();
    assert_eq!(index, 4);
    assert_eq!(
        store.document().chart.as_ref().unwrap().data[4],
        DataPoint::new("New", 0.0)
    );

    store.set_point_label(index, "Variable D").unwrap();
    store.set_point_value(index, 61.5).unwrap();
    let removed = store.remove_point(0).unwrap();

    assert_eq!(removed, DataPoint::new("Control", 15.0));
    let data = &store.document().chart.as_ref().unwrap().data;
    assert_eq!(data.len(), 4);
    assert_eq!(data[3], DataPoint::new("Variable D", 61.5));
}

#[test]
fn chart_edits_without_a_chart_fail_cleanly() {
    let mut store = chartless();
    let revision = store.revision();

    assert!(matches!(
        store.set_chart_kind(ChartKind::Pie),
        Err(StoreError::NoChart)
    ));
    assert!(matches!(store.add_point(), Err(StoreError::NoChart)));
    assert!(matches!(
        store.set_chart_text(ChartText::Title, "x"),
        Err(StoreError::NoChart)
    ));
    assert!(store.document().chart.is_none());
    assert_eq!(store.revision(), revision);
}

#[test]
fn out_of_range_points_are_rejected() {
    let mut store = DocumentStore::default();
    let before = store.document().clone();

    let err = store.set_point_value(9, 1.0).unwrap_err();
    assert!(matches!(err, StoreError::PointOutOfRange { index: 9, len: 4 }));
    assert!(store.remove_point(4).is_err());
    assert!(store.set_point_label(17, "x").is_err());

    assert_eq!(store.document(), &before);
    assert_eq!(store.revision(), 0);
}

#[test]
fn non_finite_point_values_are_rejected() {
    let mut store = DocumentStore::default();
    let before = store.document().clone();

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = store.set_point_value(0, value).unwrap_err();
        assert!(matches!(err, StoreError::NonFiniteValue(_)));
    }

    assert_eq!(store.document(), &before);
    assert_eq!(store.revision(), 0);
    store.set_point_value(0, -3.5).unwrap();
    assert_eq!(store.document().chart.as_ref().unwrap().data[0].value, -3.5);
}

#[test]
fn unknown_theme_keeps_the_current_one() {
    let mut store = DocumentStore::default();
    store.select_theme("crimson").unwrap();

    let err = store.select_theme("neon").unwrap_err();
    assert!(matches!(err, StoreError::UnknownTheme(ref id) if id == "neon"));
    assert_eq!(store.theme().id, "crimson");
}

#[test]
fn merge_keeps_fields_the_generator_left_out() {
    let mut store = DocumentStore::default();
    store.set_field(TextField::Discussion, "My own discussion.");

    let mut content = GeneratedContent::default();
    content
        .fields
        .insert(TextField::Title, "Tempo and Typing".to_string());
    content.results_visual = Some(GeneratedVisual {
        kind: "pie".to_string(),
        title: "Share of errors".to_string(),
        data: vec![DataPoint::new("Slow", 3.0), DataPoint::new("Fast", 9.0)],
        ..GeneratedVisual::default()
    });
    store.merge_generated(content);

    let doc = store.document();
    assert_eq!(doc.title, "Tempo and Typing");
    assert_eq!(doc.discussion, "My own discussion.");
    let chart = doc.chart.as_ref().unwrap();
    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.data.len(), 2);
}

#[test]
fn render_uses_the_selected_theme_and_layout() {
    let mut store = DocumentStore::default();
    store.select_theme("ocean").unwrap();
    store.select_layout(LayoutId::Geometric);

    let tree = store.render();
    assert_eq!(tree.theme_id, "ocean");
    assert_eq!(tree.layout, LayoutId::Geometric);
    assert_eq!(tree, store.render());
}
