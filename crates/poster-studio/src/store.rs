//! The document store: the single in-memory copy of the poster being
//! edited, with the theme and layout it is shown in.
//!
//! Every mutation bumps [`DocumentStore::revision`] and stamps
//! [`DocumentStore::updated_at`]. A failing operation leaves the document
//! exactly as it was.

use poster_core::models::chart::{Chart, ChartKind, DataPoint};
use poster_core::models::document::{PosterDocument, TextField};
use poster_core::models::generation::GeneratedContent;
use poster_core::models::layout::LayoutId;
use poster_core::models::theme::Theme;
use poster_core::visual::PosterTree;
use tracing::debug;

use crate::error::StoreError;

/// Editable text of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartText {
    Title,
    XAxisLabel,
    YAxisLabel,
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    document: PosterDocument,
    theme: &'static Theme,
    layout: LayoutId,
    revision: u64,
    updated_at: jiff::Timestamp,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(
            PosterDocument::initial(),
            poster_themes::default_theme(),
            LayoutId::default(),
        )
    }
}

impl DocumentStore {
    pub fn new(document: PosterDocument, theme: &'static Theme, layout: LayoutId) -> Self {
        Self {
            document,
            theme,
            layout,
            revision: 0,
            updated_at: jiff::Timestamp::now(),
        }
    }

    pub fn document(&self) -> &PosterDocument {
        &self.document
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn updated_at(&self) -> jiff::Timestamp {
        self.updated_at
    }

    /// Lay the current document out with the current theme and layout.
    pub fn render(&self) -> PosterTree {
        poster_layout::render(&self.document, self.theme, self.layout)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = jiff::Timestamp::now();
        debug!(revision = self.revision, "document updated");
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        *self.document.field_mut(field) = value.into();
        self.touch();
    }

    /// Replace any chart with the two-point starter chart.
    pub fn add_chart(&mut self) {
        self.document.chart = Some(Chart::starter());
        self.touch();
    }

    pub fn remove_chart(&mut self) {
        self.document.chart = None;
        self.touch();
    }

    fn chart_mut(&mut self) -> Result<&mut Chart, StoreError> {
        self.document.chart.as_mut().ok_or(StoreError::NoChart)
    }

    pub fn set_chart_text(
        &mut self,
        which: ChartText,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        let chart = self.chart_mut()?;
        let slot = match which {
            ChartText::Title => &mut chart.title,
            ChartText::XAxisLabel => &mut chart.x_axis_label,
            ChartText::YAxisLabel => &mut chart.y_axis_label,
        };
        *slot = value.into();
        self.touch();
        Ok(())
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) -> Result<(), StoreError> {
        self.chart_mut()?.kind = kind;
        self.touch();
        Ok(())
    }

    /// Append a `("New", 0)` point and return its index.
    pub fn add_point(&mut self) -> Result<usize, StoreError> {
        let chart = self.chart_mut()?;
        chart.data.push(DataPoint::new("New", 0.0));
        let index = chart.data.len() - 1;
        self.touch();
        Ok(index)
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut DataPoint, StoreError> {
        let chart = self.chart_mut()?;
        let len = chart.data.len();
        chart
            .data
            .get_mut(index)
            .ok_or(StoreError::PointOutOfRange { index, len })
    }

    pub fn set_point_label(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.point_mut(index)?.label = label.into();
        self.touch();
        Ok(())
    }

    pub fn set_point_value(&mut self, index: usize, value: f64) -> Result<(), StoreError> {
        if !value.is_finite() {
            return Err(StoreError::NonFiniteValue(value));
        }
        self.point_mut(index)?.value = value;
        self.touch();
        Ok(())
    }

    pub fn remove_point(&mut self, index: usize) -> Result<DataPoint, StoreError> {
        let chart = self.chart_mut()?;
        let len = chart.data.len();
        if index >= len {
            return Err(StoreError::PointOutOfRange { index, len });
        }
        let removed = chart.data.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn select_theme(&mut self, id: &str) -> Result<(), StoreError> {
        let theme =
            poster_themes::get_theme(id).ok_or_else(|| StoreError::UnknownTheme(id.to_string()))?;
        self.theme = theme;
        self.touch();
        Ok(())
    }

    pub fn select_layout(&mut self, layout: LayoutId) {
        self.layout = layout;
        self.touch();
    }

    /// Overlay a generated partial onto the current document.
    pub fn merge_generated(&mut self, content: GeneratedContent) {
        self.document.merge(content);
        self.touch();
    }
}
