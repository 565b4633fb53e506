use crate::constants::CONTROLS_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The two switches used on the host page's control panel.
///
/// Only the `hidden` class and the inline `display` property are touched, so
/// any other inline style the page sets on the panel survives a toggle.
pub trait PanelStyle {
    fn has_hidden_class(&self) -> bool;
    fn set_hidden_class(&self, hidden: bool);
    fn display_is_none(&self) -> bool;
    fn set_display_none(&self, none: bool);
}

impl PanelStyle for web::HtmlElement {
    fn has_hidden_class(&self) -> bool {
        self.class_list().contains("hidden")
    }

    fn set_hidden_class(&self, hidden: bool) {
        let classes = self.class_list();
        _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }

    fn display_is_none(&self) -> bool {
        self.style()
            .get_property_value("display")
            .map(|v| v == "none")
            .unwrap_or(false)
    }

    fn set_display_none(&self, none: bool) {
        let style = self.style();
        if none {
            _ = style.set_property("display", "none");
        } else {
            _ = style.remove_property("display");
        }
    }
}

#[inline]
pub fn show(panel: &impl PanelStyle) {
    panel.set_hidden_class(false);
    panel.set_display_none(false);
}

#[inline]
pub fn hide(panel: &impl PanelStyle) {
    panel.set_hidden_class(true);
    // fallback for pages without the CSS class
    panel.set_display_none(true);
}

#[inline]
pub fn is_hidden(panel: &impl PanelStyle) -> bool {
    panel.has_hidden_class() || panel.display_is_none()
}

/// Hide the panel in wallpaper mode, show it otherwise. Returns whether anything changed.
pub fn apply_wallpaper_mode(panel: &impl PanelStyle, wallpaper_active: bool) -> bool {
    if wallpaper_active == is_hidden(panel) {
        return false;
    }
    if wallpaper_active {
        hide(panel);
    } else {
        show(panel);
    }
    true
}

fn find_panel() -> Option<web::HtmlElement> {
    crate::dom::window_document()?
        .get_element_by_id(CONTROLS_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Controls are hidden while the window sits behind the desktop icons.
pub fn sync_with_wallpaper_mode(wallpaper_active: bool) {
    let Some(panel) = find_panel() else {
        return;
    };
    if apply_wallpaper_mode(&panel, wallpaper_active) {
        log::info!(
            "[wallpaper] controls {}",
            if wallpaper_active { "hidden" } else { "shown" }
        );
    }
}
