//! Zipslides - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PPT/PDF presentations and sharing
//! them through public links. Uploads and logins are simulated in
//! `zipslides-core`; nothing leaves the page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (AppStore context: session, registry, toasts)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router                                                      │
//! │  ├── /           LandingPage                                 │
//! │  ├── /login      LoginPage                                   │
//! │  ├── /signup     SignupPage                                  │
//! │  ├── /dashboard  DashboardPage                               │
//! │  └── /upload     UploadPage                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Toasts and browser errors
//! - [`store`] - Shared reactive state
//! - [`components`] - UI components (navigation, upload zone, cards, etc.)
//! - [`pages`] - One component per route
//! - [`services`] - Browser plumbing (clock, files, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use zipslides::{Route as AppRoute, APP_NAME};

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod pages;
pub mod services;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use store::{use_store, AppStore};
pub use types::{BrowserError, BrowserResult, Toast};

use components::{Loading, Toaster};
use pages::{DashboardPage, LandingPage, LoginPage, SignupPage, UploadPage};

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppStore::new());

    // loading screen until the first frame after mount
    let (ready, set_ready) = create_signal(false);
    request_animation_frame(move || set_ready.set(true));

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Show when=move || ready.get() fallback=|| view! { <Loading/> }>
                <Routes>
                    <Route path=AppRoute::Landing.path() view=LandingPage/>
                    <Route path=AppRoute::Login.path() view=LoginPage/>
                    <Route path=AppRoute::Signup.path() view=SignupPage/>
                    <Route path=AppRoute::Dashboard.path() view=DashboardPage/>
                    <Route path=AppRoute::Upload.path() view=UploadPage/>
                </Routes>
            </Show>
        </Router>
        <Toaster/>
    }
}
