//! Toast stack in the corner of every screen.

use leptos::*;

use crate::store::use_store;

/// Renders the store's toasts; click one to dismiss it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || store.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() on:click=move |_| store.dismiss(id)>
                            <span class="toast-icon">{toast.icon()}</span>
                            <span class="toast-message">{toast.notice.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
