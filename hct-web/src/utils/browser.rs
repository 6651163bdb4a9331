//! Thin wrappers over `window` APIs

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("Could not show alert: {}", message);
    }
}

/// Local UTC offset (east positive, minutes) in effect at `unix_secs`
pub fn utc_offset_minutes_at(unix_secs: u64) -> i32 {
    let date = js_sys::Date::new(&JsValue::from_f64(unix_secs as f64 * 1000.0));
    offset_of(&date)
}

/// Local UTC offset for a `datetime-local` value; falls back to the current offset
pub fn utc_offset_minutes_for_local(value: &str) -> i32 {
    let date = js_sys::Date::new(&JsValue::from_str(value));
    if date.get_time().is_nan() {
        return offset_of(&js_sys::Date::new_0());
    }
    offset_of(&date)
}

// getTimezoneOffset() is UTC minus local
fn offset_of(date: &js_sys::Date) -> i32 {
    -(date.get_timezone_offset() as i32)
}

/// Hide the static loading element from index.html
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("Failed to hide loading screen: {:?}", e);
                }
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
