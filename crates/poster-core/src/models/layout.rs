use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Structural arrangement template. Orthogonal to the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LayoutId {
    /// Left sidebar plus three flowing columns.
    #[default]
    Classic,
    /// Three equal columns.
    Standard,
    /// Four-column grid with a wide chart-first centre.
    Visual,
    /// Free-positioned nodes joined by curved arrows.
    Cycle,
    /// Colour-coded panels on a four-column grid.
    Geometric,
    /// Dense four-column grid with a smaller type scale.
    Research,
}

impl LayoutId {
    pub const ALL: [LayoutId; 6] = [
        LayoutId::Classic,
        LayoutId::Standard,
        LayoutId::Visual,
        LayoutId::Cycle,
        LayoutId::Geometric,
        LayoutId::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutId::Classic => "classic",
            LayoutId::Standard => "standard",
            LayoutId::Visual => "visual",
            LayoutId::Cycle => "cycle",
            LayoutId::Geometric => "geometric",
            LayoutId::Research => "research",
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutId::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| CoreError::UnknownLayout(s.to_string()))
    }
}
