//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - on-screen notifications
//! - **Error Types** - browser API failures

use std::fmt;
use zipslides::{Notice, NoticeLevel};

// =============================================================================
// Toast Types
// =============================================================================

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Monotonic id, used as the list key and for dismissal
    pub id: u64,
    /// What to show
    pub notice: Notice,
}

impl Toast {
    /// CSS classes for the toast container.
    pub fn class(&self) -> String {
        format!("toast {}", self.notice.level.css_class())
    }

    /// Leading icon.
    pub fn icon(&self) -> &'static str {
        match self.notice.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✕",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Browser API failures.
#[derive(Clone, Debug)]
pub enum BrowserError {
    /// No `window` (not running in a page).
    NoWindow,
    /// Clipboard unavailable or write refused.
    Clipboard(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::NoWindow => write!(f, "Browser error: no global window"),
            BrowserError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for BrowserError {}

/// Result type alias for browser operations.
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Best-effort text for a JS exception value.
pub(crate) fn js_error_message(e: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
