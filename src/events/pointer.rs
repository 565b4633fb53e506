use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `mouse_state` at the latest pointer position over the canvas.
///
/// The render loop samples the slot once per frame; it never subscribes itself.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    mouse_state: Rc<RefCell<input::MouseState>>,
) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        if pos.is_finite() {
            mouse_state.borrow_mut().record(pos);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
