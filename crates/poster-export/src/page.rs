use std::path::{Path, PathBuf};

use poster_core::models::layout::LayoutId;
use serde::Serialize;

use crate::error::ExportError;

/// Physical page size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl PageSize {
    pub fn is_landscape(&self) -> bool {
        self.width_in >= self.height_in
    }
}

/// The printed poster, landscape.
pub const POSTER_PAGE: PageSize = PageSize {
    width_in: 48.0,
    height_in: 36.0,
};

/// Device pixels per logical canvas unit when rasterizing.
pub const RASTER_SCALE: f64 = 2.0;

pub const PDF_FILE_NAME: &str = "science-poster.pdf";

pub fn deck_file_name(layout: LayoutId) -> String {
    format!("SciencePoster_{layout}.pptx")
}

/// Bytes of an export, with the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}
