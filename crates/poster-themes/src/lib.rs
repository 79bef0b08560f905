//! poster-themes
//!
//! The fixed theme catalog and the theme-to-motif table. Pure data; no AWS
//! dependency. Themes are `'static` constants, selected by id.

pub mod catalog;
pub mod error;
pub mod motif;

use poster_core::models::theme::{Theme, ThemeSummary};

use error::ThemeError;

/// All themes in display order.
pub fn list_themes() -> &'static [Theme] {
    &catalog::THEMES
}

/// The first theme in the catalog.
pub fn default_theme() -> &'static Theme {
    &catalog::THEMES[0]
}

/// Look up a theme by id.
pub fn get_theme(id: &str) -> Option<&'static Theme> {
    catalog::THEMES.iter().find(|t| t.id == id)
}

/// Look up a theme by id, failing on ids outside the catalog.
pub fn require_theme(id: &str) -> Result<&'static Theme, ThemeError> {
    get_theme(id).ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))
}

/// Id/name pairs for a picker.
pub fn theme_summaries() -> Vec<ThemeSummary> {
    list_themes().iter().map(Theme::summary).collect()
}

/// The catalog as JSON, for frontends that style their own widgets.
pub fn catalog_json() -> Result<String, ThemeError> {
    Ok(serde_json::to_string_pretty(list_themes())?)
}
