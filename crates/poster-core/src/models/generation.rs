use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::chart::{Chart, ChartKind, DataPoint};
use super::document::TextField;

/// Structured output of a content generation call: a partial document.
///
/// Only the fields the model actually produced are present. Merge it
/// into a [`super::document::PosterDocument`] with `merge`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGeneratedContent")]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub fields: BTreeMap<TextField, String>,
    pub results_visual: Option<GeneratedVisual>,
    /// Setup diagram. Kept for callers; no layout has a slot for it.
    pub methods_visual: Option<GeneratedVisual>,
}

impl GeneratedContent {
    pub fn get(&self, field: TextField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Required fields the model failed to produce.
    pub fn missing(&self, required: &[TextField]) -> Vec<TextField> {
        required
            .iter()
            .copied()
            .filter(|f| !self.fields.contains_key(f))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeneratedContent {
    title: Option<String>,
    authors: Option<String>,
    affiliation: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    introduction: Option<String>,
    methods: Option<String>,
    results: Option<String>,
    discussion: Option<String>,
    conclusions: Option<String>,
    references: Option<String>,
    contact_name: Option<String>,
    contact_org: Option<String>,
    contact_email: Option<String>,
    // The serialized form of `GeneratedContent` nests fields under `fields`.
    #[serde(default)]
    fields: BTreeMap<TextField, String>,
    results_visual: Option<GeneratedVisual>,
    methods_visual: Option<GeneratedVisual>,
}

impl From<RawGeneratedContent> for GeneratedContent {
    fn from(raw: RawGeneratedContent) -> Self {
        let mut fields = raw.fields;
        let pairs = [
            (TextField::Title, raw.title),
            (TextField::Authors, raw.authors),
            (TextField::Affiliation, raw.affiliation),
            (TextField::Abstract, raw.abstract_text),
            (TextField::Introduction, raw.introduction),
            (TextField::Methods, raw.methods),
            (TextField::Results, raw.results),
            (TextField::Discussion, raw.discussion),
            (TextField::Conclusions, raw.conclusions),
            (TextField::References, raw.references),
            (TextField::ContactName, raw.contact_name),
            (TextField::ContactOrg, raw.contact_org),
            (TextField::ContactEmail, raw.contact_email),
        ];
        for (field, value) in pairs {
            if let Some(value) = value {
                fields.insert(field, value);
            }
        }

        Self {
            fields,
            results_visual: raw.results_visual,
            methods_visual: raw.methods_visual,
        }
    }
}

/// A chart or diagram suggested by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVisual {
    /// `bar`, `line`, `pie` or `generic-svg`. Anything else is dropped.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub svg_content: Option<String>,
}

impl GeneratedVisual {
    pub fn chart_kind(&self) -> Option<ChartKind> {
        match self.kind.trim().to_ascii_lowercase().as_str() {
            "bar" => Some(ChartKind::Bar),
            "line" => Some(ChartKind::Line),
            "pie" => Some(ChartKind::Pie),
            "generic-svg" | "generic" | "svg" => Some(ChartKind::Generic),
            _ => None,
        }
    }

    /// Convert into a complete [`Chart`], or `None` when the visual is
    /// unusable: unknown kind, a data chart with no points or non-finite
    /// values, or a generic visual without markup.
    pub fn into_chart(self) -> Option<Chart> {
        let kind = self.chart_kind()?;
        match kind {
            ChartKind::Generic => {
                let svg = self.svg_content.filter(|s| !s.trim().is_empty())?;
                Some(Chart {
                    kind,
                    title: self.title,
                    x_axis_label: self.x_axis_label.unwrap_or_default(),
                    y_axis_label: self.y_axis_label.unwrap_or_default(),
                    data: Vec::new(),
                    svg_content: Some(svg),
                })
            }
            _ => {
                if self.data.is_empty() || self.data.iter().any(|p| !p.value.is_finite()) {
                    return None;
                }
                Some(Chart {
                    kind,
                    title: self.title,
                    x_axis_label: self.x_axis_label.unwrap_or_default(),
                    y_axis_label: self.y_axis_label.unwrap_or_default(),
                    data: self.data,
                    svg_content: None,
                })
            }
        }
    }
}

/// An auditable record of one generation call.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerationTransaction {
    pub id: Uuid,
    pub model_id: String,
    pub status: GenerationStatus,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GenerationStatus {
    Pending,
    Complete,
    Failed,
    Cancelled,
}
