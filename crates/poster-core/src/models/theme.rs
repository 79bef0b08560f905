use serde::Serialize;
use ts_rs::TS;

use crate::color::Color;

/// The seven named colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text: Color,
    pub background: Color,
    pub sidebar_background: Color,
    pub sidebar_text: Color,
}

/// CSS font stacks for headings and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// An immutable named bundle of colors and fonts.
///
/// Themes are compile-time constants; callers select them by id and hold
/// `&'static Theme` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
}

impl Theme {
    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
        }
    }
}

/// What the theme picker lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
}

/// Vector motif families drawn behind the poster header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Motif {
    /// Ring with a cross through it.
    CurvedLeaf,
    Wave,
    ConcentricCircles,
    DiamondGrid,
    LeafSilhouette,
}
