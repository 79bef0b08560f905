use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::chart::{Chart, ChartKind, DataPoint};
use super::generation::GeneratedContent;
use crate::error::CoreError;

/// The authored content of a poster. Single source of truth for every
/// layout and export.
///
/// Every text field is always present (possibly empty). `abstract` is a
/// Rust keyword, hence `abstract_text`; it serializes as `abstract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PosterDocument {
    pub title: String,
    pub authors: String,
    pub affiliation: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub introduction: String,
    pub methods: String,
    pub results: String,
    pub discussion: String,
    pub conclusions: String,
    pub references: String,
    pub contact_name: String,
    pub contact_org: String,
    pub contact_email: String,
    #[serde(rename = "resultsChart")]
    pub chart: Option<Chart>,
}

impl Default for PosterDocument {
    fn default() -> Self {
        Self::initial()
    }
}

impl PosterDocument {
    /// Starter content shown when a new editing session opens.
    pub fn initial() -> Self {
        Self {
            title: "PROJECT TITLE GOES HERE".to_string(),
            authors: "John Doe\u{b9}, Jane Smith\u{b2}".to_string(),
            affiliation: "\u{b9}High School Name, \u{b2}University Mentor".to_string(),
            abstract_text: "This is a placeholder for the abstract. Use the 'Generate with AI' \
                            button to fill this poster based on your topic or notes."
                .to_string(),
            introduction: "Introduction text goes here. Explain the background and \
                           significance of your research."
                .to_string(),
            methods: "Describe your experimental setup, materials used, and procedures followed."
                .to_string(),
            results: "Present your key findings here. You can include descriptions of charts \
                      and tables."
                .to_string(),
            discussion: "Interpret your results. Discuss implications, limitations, and future \
                         directions."
                .to_string(),
            conclusions: "Summarize the main takeaways of your research.".to_string(),
            references: "1. Author A. et al. (Year). Title. Journal.\n\
                         2. Author B. et al. (Year). Title. Journal."
                .to_string(),
            contact_name: "Your Name".to_string(),
            contact_org: "Your School/Org".to_string(),
            contact_email: "email@example.com".to_string(),
            chart: Some(Chart {
                kind: ChartKind::Bar,
                title: "Comparative Analysis Results".to_string(),
                x_axis_label: "Test Groups".to_string(),
                y_axis_label: "Efficiency (%)".to_string(),
                data: vec![
                    DataPoint::new("Control", 15.0),
                    DataPoint::new("Variable A", 45.0),
                    DataPoint::new("Variable B", 32.0),
                    DataPoint::new("Variable C", 88.0),
                ],
                svg_content: None,
            }),
        }
    }

    /// A document with every text field empty and no chart.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            authors: String::new(),
            affiliation: String::new(),
            abstract_text: String::new(),
            introduction: String::new(),
            methods: String::new(),
            results: String::new(),
            discussion: String::new(),
            conclusions: String::new(),
            references: String::new(),
            contact_name: String::new(),
            contact_org: String::new(),
            contact_email: String::new(),
            chart: None,
        }
    }

    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::Authors => &self.authors,
            TextField::Affiliation => &self.affiliation,
            TextField::Abstract => &self.abstract_text,
            TextField::Introduction => &self.introduction,
            TextField::Methods => &self.methods,
            TextField::Results => &self.results,
            TextField::Discussion => &self.discussion,
            TextField::Conclusions => &self.conclusions,
            TextField::References => &self.references,
            TextField::ContactName => &self.contact_name,
            TextField::ContactOrg => &self.contact_org,
            TextField::ContactEmail => &self.contact_email,
        }
    }

    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Title => &mut self.title,
            TextField::Authors => &mut self.authors,
            TextField::Affiliation => &mut self.affiliation,
            TextField::Abstract => &mut self.abstract_text,
            TextField::Introduction => &mut self.introduction,
            TextField::Methods => &mut self.methods,
            TextField::Results => &mut self.results,
            TextField::Discussion => &mut self.discussion,
            TextField::Conclusions => &mut self.conclusions,
            TextField::References => &mut self.references,
            TextField::ContactName => &mut self.contact_name,
            TextField::ContactOrg => &mut self.contact_org,
            TextField::ContactEmail => &mut self.contact_email,
        }
    }

    /// Overlay generated content onto this document.
    ///
    /// Fields the generator left out keep their current value. A results
    /// visual replaces the chart only when it converts into a complete
    /// chart; otherwise the existing chart stays.
    pub fn merge(&mut self, generated: GeneratedContent) {
        let GeneratedContent {
            fields,
            results_visual,
            methods_visual: _,
        } = generated;

        for (field, value) in fields {
            *self.field_mut(field) = value;
        }

        if let Some(chart) = results_visual.and_then(|v| v.into_chart()) {
            self.chart = Some(chart);
        }
    }
}

/// Addressable text fields of a [`PosterDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum TextField {
    Title,
    Authors,
    Affiliation,
    Abstract,
    Introduction,
    Methods,
    Results,
    Discussion,
    Conclusions,
    References,
    ContactName,
    ContactOrg,
    ContactEmail,
}

impl TextField {
    pub const ALL: [TextField; 13] = [
        TextField::Title,
        TextField::Authors,
        TextField::Affiliation,
        TextField::Abstract,
        TextField::Introduction,
        TextField::Methods,
        TextField::Results,
        TextField::Discussion,
        TextField::Conclusions,
        TextField::References,
        TextField::ContactName,
        TextField::ContactOrg,
        TextField::ContactEmail,
    ];

    /// The JSON key used by the document and by generated content.
    pub fn key(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Authors => "authors",
            TextField::Affiliation => "affiliation",
            TextField::Abstract => "abstract",
            TextField::Introduction => "introduction",
            TextField::Methods => "methods",
            TextField::Results => "results",
            TextField::Discussion => "discussion",
            TextField::Conclusions => "conclusions",
            TextField::References => "references",
            TextField::ContactName => "contactName",
            TextField::ContactOrg => "contactOrg",
            TextField::ContactEmail => "contactEmail",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TextField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
