//! Clipboard access through `navigator.clipboard.writeText`.
//!
//! Looked up reflectively: the API is missing outside secure contexts and
//! the call fails when the page lacks focus or permission.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::types::{js_error_message, BrowserError, BrowserResult};

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> BrowserResult<()> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| BrowserError::Clipboard("clipboard API unavailable".to_string()))?;

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| BrowserError::Clipboard("writeText unavailable".to_string()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| BrowserError::Clipboard(js_error_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| BrowserError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| BrowserError::Clipboard(js_error_message(&e)))?;

    log::debug!("📋 Copied {} chars", text.len());
    Ok(())
}
