use crate::constants::{
    CMD_DISABLE_WALLPAPER_MODE, CMD_ENABLE_WALLPAPER_MODE, CMD_IS_WALLPAPER_MODE,
    EVENT_WALLPAPER_MODE_CHANGED, HOST_BRIDGE_GLOBAL,
};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Client for the desktop host's wallpaper-mode commands. In a plain browser
// there is no bridge and the mode always reads as inactive.

fn bridge() -> Option<JsValue> {
    let window: JsValue = web::window()?.into();
    Reflect::get(&window, &JsValue::from_str(HOST_BRIDGE_GLOBAL))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn bridge_fn(namespace: &str, name: &str) -> anyhow::Result<(JsValue, Function)> {
    let global = bridge().ok_or_else(|| anyhow::anyhow!("no host bridge"))?;
    let ns = Reflect::get(&global, &JsValue::from_str(namespace))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let f = Reflect::get(&ns, &JsValue::from_str(name))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<Function>()
        .map_err(|_| anyhow::anyhow!("{}.{} is not a function", namespace, name))?;
    Ok((ns, f))
}

async fn invoke(cmd: &str) -> anyhow::Result<JsValue> {
    let (core, invoke) = bridge_fn("core", "invoke")?;
    let promise = invoke
        .call1(&core, &JsValue::from_str(cmd))
        .map_err(|e| anyhow::anyhow!("{} threw: {:?}", cmd, e))?
        .dyn_into::<Promise>()
        .map_err(|_| anyhow::anyhow!("{} did not return a promise", cmd))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{} rejected: {:?}", cmd, e))
}

pub fn host_available() -> bool {
    bridge().is_some()
}

/// Query the host; unreachable or failing hosts read as inactive.
pub async fn is_active() -> bool {
    if !host_available() {
        return false;
    }
    match invoke(CMD_IS_WALLPAPER_MODE).await {
        Ok(v) => v.as_bool().unwrap_or(false),
        Err(e) => {
            log::warn!("[wallpaper] query failed: {:?}", e);
            false
        }
    }
}

/// Ask the host to enter or leave wallpaper mode, then report the resulting mode.
pub async fn set_active(enabled: bool) -> anyhow::Result<bool> {
    let cmd = if enabled {
        CMD_ENABLE_WALLPAPER_MODE
    } else {
        CMD_DISABLE_WALLPAPER_MODE
    };
    invoke(cmd).await?;
    log::info!("[wallpaper] {} ok", cmd);
    Ok(is_active().await)
}

/// Subscribe to mode changes made outside this page (e.g. from the tray menu).
pub fn listen_mode_changes(mut handler: impl FnMut(bool) + 'static) -> anyhow::Result<()> {
    let (event_ns, listen) = bridge_fn("event", "listen")?;
    let closure = Closure::wrap(Box::new(move |ev: JsValue| {
        let active = Reflect::get(&ev, &JsValue::from_str("payload"))
            .ok()
            .and_then(|p| p.as_bool());
        match active {
            Some(active) => handler(active),
            None => log::warn!("[wallpaper] ignoring event without boolean payload"),
        }
    }) as Box<dyn FnMut(JsValue)>);
    listen
        .call2(
            &event_ns,
            &JsValue::from_str(EVENT_WALLPAPER_MODE_CHANGED),
            closure.as_ref(),
        )
        .map_err(|e| anyhow::anyhow!("listen threw: {:?}", e))?;
    closure.forget();
    Ok(())
}
