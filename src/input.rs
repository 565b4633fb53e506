use glam::DVec2;
use web_sys as web;

/// Last observed pointer position in surface pixels. Origin until the first move.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MouseState {
    pub pos: DVec2,
}

impl MouseState {
    #[inline]
    pub fn record(&mut self, pos: DVec2) {
        self.pos = pos;
    }
}

/// Map a client-space point into canvas backing pixels.
///
/// `rect_origin`/`rect_size` are the canvas's CSS box, `backing` its pixel size.
#[inline]
pub fn client_to_surface(
    client: DVec2,
    rect_origin: DVec2,
    rect_size: DVec2,
    backing: DVec2,
) -> DVec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * backing
    } else {
        local
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        DVec2::new(canvas.width() as f64, canvas.height() as f64),
    )
}
