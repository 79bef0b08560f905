//! On-screen preview scaling. The poster itself never changes size; the
//! preview shows it at a uniform zoom.

use poster_core::visual::{PosterTree, Size};
use poster_layout::constants::CANVAS;
use poster_layout::scaled_size;

pub const MIN_ZOOM: f64 = 0.05;
pub const MAX_ZOOM: f64 = 0.4;

const FIT_MARGIN: f64 = 60.0;
const FIT_MIN: f64 = 0.08;
const FIT_MAX: f64 = 0.5;

/// Clamp a user-chosen zoom to the slider range. Non-finite input falls
/// back to the smallest zoom.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        MIN_ZOOM
    }
}

/// Zoom that fits the canvas width into a viewport `viewport_width` wide.
pub fn auto_fit_zoom(viewport_width: f64) -> f64 {
    let fit = (viewport_width - FIT_MARGIN) / CANVAS.width;
    if fit.is_finite() {
        fit.clamp(FIT_MIN, FIT_MAX)
    } else {
        FIT_MIN
    }
}

pub fn preview_size(tree: &PosterTree, zoom: f64) -> Size {
    scaled_size(tree, zoom)
}
