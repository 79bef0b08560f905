use poster_core::visual::{PosterTree, Size};
use tracing::info;

use crate::error::ExportError;
use crate::page::{ExportArtifact, PDF_FILE_NAME, POSTER_PAGE, PageSize, RASTER_SCALE};
use crate::svg::to_svg;

/// Everything a rasterizer needs to draw one poster page.
#[derive(Debug, Clone)]
pub struct RasterJob<'a> {
    pub tree: &'a PosterTree,
    /// The tree serialized by [`to_svg`].
    pub svg: String,
    pub page: PageSize,
    pub scale: f64,
}

impl RasterJob<'_> {
    /// Bitmap size before it is placed on the page.
    pub fn pixel_size(&self) -> Size {
        Size {
            width: self.tree.canvas.width * self.scale,
            height: self.tree.canvas.height * self.scale,
        }
    }
}

/// Draws a poster into a single-page PDF document.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, job: &RasterJob<'_>) -> Result<Vec<u8>, ExportError>;
}

/// Prepare the print job for `tree`: a 48×36 inch landscape page drawn at
/// twice the logical resolution.
pub fn pdf_job(tree: &PosterTree) -> RasterJob<'_> {
    RasterJob {
        tree,
        svg: to_svg(tree),
        page: POSTER_PAGE,
        scale: RASTER_SCALE,
    }
}

/// Rasterize `tree` into `science-poster.pdf`.
pub fn export_pdf(
    tree: &PosterTree,
    rasterizer: &dyn Rasterizer,
) -> Result<ExportArtifact, ExportError> {
    let job = pdf_job(tree);
    let bytes = rasterizer.rasterize(&job)?;
    info!(
        layout = %tree.layout,
        theme = tree.theme_id,
        bytes = bytes.len(),
        "exported PDF"
    );
    Ok(ExportArtifact {
        file_name: PDF_FILE_NAME.to_string(),
        bytes,
    })
}
