//! Footer component

use leptos::*;
use zipslides::APP_NAME;

use super::Brand;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <Brand/>
            <div class="footer-copy">
                "© 2024 " {APP_NAME} ". All rights reserved. Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
