//! Browser services.
//!
//! Adapters that plug the page into the platform-independent `zipslides`
//! crate, plus the few browser APIs the screens call directly:
//!
//! # Services
//!
//! - [`clock`] - `setTimeout`-backed delays
//! - [`files`] - `web_sys::File` as a `FileHandle`, object URLs
//! - [`clipboard`] - copying share links

pub mod clipboard;
pub mod clock;
pub mod files;

pub use clipboard::*;
pub use clock::*;
pub use files::*;
