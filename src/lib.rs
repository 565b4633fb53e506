#![cfg(target_arch = "wasm32")]
use crate::core::{AppSettings, CurveGroupSettings, GroupSide, Layout, Scheduler, SettingsError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod canvas;
mod constants;
mod controls;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod storage;
mod wallpaper;

/// Everything the host-facing API needs after startup.
struct Runtime {
    settings: Rc<RefCell<AppSettings>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    render_loop: Option<frame::RenderLoop>,
}

impl Runtime {
    /// Swap in a new settings snapshot, persist it and restart the loop.
    fn replace_settings(&mut self, next: AppSettings) {
        let next = next.sanitized();
        let fps = next.target_fps;
        storage::save(&next);
        *self.settings.borrow_mut() = next;
        self.reinstall_loop(fps);
    }

    fn reinstall_loop(&mut self, target_fps: u32) {
        if let Some(old) = self.render_loop.take() {
            old.cancel();
        }
        let interval_ms = {
            let mut ctx = self.frame_ctx.borrow_mut();
            ctx.scheduler.reinstall(target_fps, instant::now());
            ctx.scheduler.clock().frame_interval_ms()
        };
        self.render_loop = Some(frame::start_loop(self.frame_ctx.clone()));
        log::info!(
            "[settings] applied, target fps {} ({:.2}ms interval)",
            target_fps,
            interval_ms
        );
    }

    fn snapshot(&self) -> AppSettings {
        self.settings.borrow().clone()
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Result<R, JsValue> {
    RUNTIME.with(|slot| match slot.borrow_mut().as_mut() {
        Some(rt) => Ok(f(rt)),
        None => Err(JsValue::from_str("renderer not started")),
    })
}

fn js_err(e: SettingsError) -> JsValue {
    log::warn!("[settings] rejected update: {}", e);
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wobble-circles starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if RUNTIME.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let initial = storage::load_or_default();
    let target_fps = initial.target_fps;
    let settings = Rc::new(RefCell::new(initial));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_tracking(&canvas, mouse.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        settings: settings.clone(),
        mouse,
        surface: canvas::CanvasSurface::new(canvas)?,
        scheduler: Scheduler::new(target_fps, instant::now()),
    }));
    let render_loop = frame::start_loop(frame_ctx.clone());
    RUNTIME.with(|slot| {
        *slot.borrow_mut() = Some(Runtime {
            settings,
            frame_ctx,
            render_loop: Some(render_loop),
        });
    });

    // Wallpaper mode only decides whether the control panel is visible.
    controls::sync_with_wallpaper_mode(wallpaper::is_active().await);
    if wallpaper::host_available() {
        if let Err(e) = wallpaper::listen_mode_changes(controls::sync_with_wallpaper_mode) {
            log::warn!("[wallpaper] could not subscribe to mode changes: {:?}", e);
        }
    }
    Ok(())
}

/// Replace the whole settings graph from its JSON form.
#[wasm_bindgen]
pub fn apply_settings(json: &str) -> Result<(), JsValue> {
    let next = AppSettings::from_json(json).map_err(js_err)?;
    with_runtime(|rt| rt.replace_settings(next))
}

/// Replace one group (`"left"` or `"right"`) from its JSON form.
#[wasm_bindgen]
pub fn set_group_settings(side: &str, json: &str) -> Result<(), JsValue> {
    let side: GroupSide = side.parse().map_err(js_err)?;
    let group: CurveGroupSettings = serde_json::from_str(json)
        .map_err(SettingsError::Parse)
        .map_err(js_err)?;
    with_runtime(|rt| {
        let next = rt.snapshot().with_group(side, group);
        rt.replace_settings(next);
    })
}

#[wasm_bindgen]
pub fn set_target_fps(fps: u32) -> Result<(), JsValue> {
    with_runtime(|rt| {
        let next = AppSettings {
            target_fps: fps,
            ..rt.snapshot()
        };
        rt.replace_settings(next);
    })
}

#[wasm_bindgen]
pub fn set_layout(dual: bool) -> Result<(), JsValue> {
    let layout = if dual { Layout::Dual } else { Layout::Single };
    with_runtime(|rt| {
        let next = AppSettings {
            layout,
            ..rt.snapshot()
        };
        rt.replace_settings(next);
    })
}

#[wasm_bindgen]
pub fn reset_settings() -> Result<(), JsValue> {
    with_runtime(|rt| rt.replace_settings(AppSettings::default()))
}

#[wasm_bindgen]
pub fn current_settings() -> Result<String, JsValue> {
    with_runtime(|rt| rt.snapshot())?
        .to_json()
        .map_err(js_err)
}

/// Resolves to the mode the host reports afterwards; failures are logged.
#[wasm_bindgen]
pub async fn set_wallpaper_mode(enabled: bool) -> Result<JsValue, JsValue> {
    let active = match wallpaper::set_active(enabled).await {
        Ok(active) => active,
        Err(e) => {
            log::warn!("[wallpaper] switch to {} failed: {:?}", enabled, e);
            wallpaper::is_active().await
        }
    };
    controls::sync_with_wallpaper_mode(active);
    Ok(JsValue::from_bool(active))
}

#[wasm_bindgen]
pub async fn wallpaper_mode() -> Result<JsValue, JsValue> {
    Ok(JsValue::from_bool(wallpaper::is_active().await))
}
