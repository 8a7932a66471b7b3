//! Full-screen loading indicator, shown until the app's first frame.

use leptos::*;
use zipslides::APP_NAME;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="brand-logo brand-logo-large spin">"⚡"</div>
            <h1 class="loading-title">{APP_NAME}</h1>
            <p class="loading-text">"Loading your experience..."</p>
            <div class="loading-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}

/// Inline spinner with a label, used inside busy buttons and cards.
#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="spinner-row">
            <span class="spinner"></span>
            {label}
        </span>
    }
}
