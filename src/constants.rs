/// Page and host integration constants.
///
/// DOM ids, the persistence key and the desktop host's command and event
/// names live here so the glue modules carry no string literals.
// Elements provided by the host page
pub const CANVAS_ID: &str = "wobble-canvas";
pub const CONTROLS_ID: &str = "controls";

// localStorage key for the full settings graph
pub const SETTINGS_STORAGE_KEY: &str = "wobble-circles.settings";

// Desktop host command bridge
pub const HOST_BRIDGE_GLOBAL: &str = "__TAURI__";
pub const CMD_IS_WALLPAPER_MODE: &str = "is_wallpaper_mode";
pub const CMD_ENABLE_WALLPAPER_MODE: &str = "enable_wallpaper_mode";
pub const CMD_DISABLE_WALLPAPER_MODE: &str = "disable_wallpaper_mode";
pub const EVENT_WALLPAPER_MODE_CHANGED: &str = "wallpaper-mode-changed";

// Fallback surface extent when the window reports nothing usable
pub const MIN_SURFACE_PX: f64 = 1.0;
