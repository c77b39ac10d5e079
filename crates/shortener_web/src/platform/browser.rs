//! Thin wrappers over the `web_sys` calls the front end needs.

use shortener_logging::shortener_warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn window() -> Option<web_sys::Window> {
    let window = web_sys::window();
    if window.is_none() {
        shortener_warn!("No global window object");
    }
    window
}

/// Current `location.pathname`, `/` when unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Current `location.origin`, empty when unavailable.
pub fn origin() -> String {
    window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}

/// Full page load of `url`.
pub fn navigate(url: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().set_href(url)
}

pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
