//! Navigation bars and the brand mark.

use leptos::*;
use leptos_router::*;
use zipslides::{Route, APP_NAME};

use crate::store::use_store;

/// Logo tile plus product name.
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="brand">
            <div class="brand-logo">"⚡"</div>
            <span class="brand-name">{APP_NAME}</span>
        </div>
    }
}

/// "← Back to Home" link.
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <A href=Route::Landing.path() class="back-link">"← Back to Home"</A>
    }
}

/// Landing page bar: brand, Login, Get Started.
#[component]
pub fn LandingNav() -> impl IntoView {
    view! {
        <nav class="nav">
            <Brand/>
            <div class="nav-actions">
                <A href=Route::Login.path() class="nav-link">"Login"</A>
                <A href=Route::Signup.path() class="btn btn-primary">"Get Started"</A>
            </div>
        </nav>
    }
}

/// Upload screen bar: back link, brand.
#[component]
pub fn UploadNav() -> impl IntoView {
    view! {
        <nav class="nav">
            <BackLink/>
            <Brand/>
        </nav>
    }
}

/// Dashboard bar: brand, Upload, Logout.
#[component]
pub fn DashboardNav() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Some(notice) = store.mutate(|s| s.logout()) {
            store.notify(notice);
        }
        navigate(Route::Landing.path(), Default::default());
    };

    view! {
        <nav class="nav nav-bar">
            <Brand/>
            <div class="nav-actions">
                <A href=Route::Upload.path() class="btn btn-primary">"⬆ Upload"</A>
                <button class="btn btn-secondary" on:click=on_logout>"⎋ Logout"</button>
            </div>
        </nav>
    }
}
