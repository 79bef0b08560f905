use poster_studio::preview::{MAX_ZOOM, MIN_ZOOM, auto_fit_zoom, clamp_zoom, preview_size};
use poster_studio::store::DocumentStore;

#[test]
fn zoom_is_clamped_to_the_slider_range() {
    assert_eq!(clamp_zoom(0.15), 0.15);
    assert_eq!(clamp_zoom(0.0), MIN_ZOOM);
    assert_eq!(clamp_zoom(2.0), MAX_ZOOM);
    assert_eq!(clamp_zoom(f64::NAN), MIN_ZOOM);
}

#[test]
fn auto_fit_leaves_a_margin() {
    assert_eq!(auto_fit_zoom(1260.0), 0.25);
    assert_eq!(auto_fit_zoom(100.0), 0.08);
    assert_eq!(auto_fit_zoom(10_000.0), 0.5);
}

#[test]
fn preview_scales_the_canvas_uniformly() {
    let tree = DocumentStore::default().render();
    let size = preview_size(&tree, 0.25);
    assert_eq!(size.width, 1200.0);
    assert_eq!(size.height, 900.0);
    assert_eq!(tree.canvas.width, 4800.0);
}
