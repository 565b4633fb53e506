use crate::constants::MIN_SURFACE_PX;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Current viewport extent in CSS pixels.
pub fn viewport_extent() -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite())
            .unwrap_or(MIN_SURFACE_PX)
            .max(MIN_SURFACE_PX)
    };
    match web::window() {
        Some(w) => (read(w.inner_width()), read(w.inner_height())),
        None => (MIN_SURFACE_PX, MIN_SURFACE_PX),
    }
}
