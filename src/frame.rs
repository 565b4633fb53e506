use crate::canvas::CanvasSurface;
use crate::core::{AppSettings, FrameOutcome, Scheduler};
use crate::dom;
use crate::input;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    /// Current settings; replaced wholesale by the host API.
    pub settings: Rc<RefCell<AppSettings>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub surface: CanvasSurface,
    pub scheduler: Scheduler,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        // Snapshot both shared slots before any drawing.
        let settings = self.settings.borrow().clone();
        let pointer = self.mouse.borrow().pos;
        let viewport = dom::viewport_extent();
        self.scheduler
            .on_frame(timestamp_ms, &mut self.surface, viewport, &settings, pointer)
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// Self-resubmitting `requestAnimationFrame` loop with explicit cancellation.
pub struct RenderLoop {
    tick: Rc<RefCell<Option<TickClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RenderLoop {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        // Resubmit first; an admitted frame always runs to completion after this.
        if let Some(t) = tick_clone.borrow().as_ref() {
            pending_clone.set(request_frame(t));
        }
        frame_ctx.borrow_mut().frame(timestamp_ms);
    }) as Box<dyn FnMut(f64)>));

    if let Some(t) = tick.borrow().as_ref() {
        pending.set(request_frame(t));
    }
    log::info!("[loop] render loop installed");
    RenderLoop { tick, pending }
}

impl RenderLoop {
    /// Unregister the pending frame request and release the callback.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[loop] render loop cancelled");
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
