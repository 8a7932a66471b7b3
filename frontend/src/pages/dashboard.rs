//! Dashboard: profile sidebar with stats, presentation list, profile form.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;
use zipslides::Route;

use crate::components::{DashboardNav, PresentationCard, TextField};
use crate::store::use_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Presentations,
    Profile,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_store();
    let (tab, set_tab) = create_signal(Tab::Presentations);

    let profile = move || store.state.with(|s| s.session.profile());
    let count = move || store.state.with(|s| s.registry.len());
    let views = move || store.state.with(|s| s.registry.total_views());
    let downloads = move || store.state.with(|s| s.registry.total_downloads());

    let tab_button = move |which: Tab, label: &'static str| {
        view! {
            <button
                class="tab"
                class:active=move || tab.get() == which
                on:click=move |_| set_tab.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <header class="page-header">
                <DashboardNav/>
            </header>
            <div class="container dashboard-grid">
                <aside class="sidebar">
                    <div class="card profile-card">
                        <div class="avatar">"👤"</div>
                        <h3>{move || profile().name}</h3>
                        <p class="muted">{move || profile().email}</p>
                        <p class="muted small">{move || profile().company}</p>
                        <p class="muted small">
                            {move || format!("Member since {}", profile().member_since)}
                        </p>
                    </div>

                    <div class="card stats">
                        <div class="stat">
                            <span class="stat-label">"Presentations"</span>
                            <span class="stat-value">{count}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Total Views"</span>
                            <span class="stat-value">{views}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Downloads"</span>
                            <span class="stat-value">{downloads}</span>
                        </div>
                    </div>

                    <nav class="card tabs">
                        {tab_button(Tab::Presentations, "📄 Presentations")}
                        {tab_button(Tab::Profile, "⚙ Profile Settings")}
                    </nav>
                </aside>

                <main class="dashboard-main">
                    {move || match tab.get() {
                        Tab::Presentations => view! { <PresentationsTab/> }.into_view(),
                        Tab::Profile => view! { <ProfileTab/> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
fn PresentationsTab() -> impl IntoView {
    let store = use_store();
    let records = move || store.state.with(|s| s.registry.as_slice().to_vec());
    let is_empty = move || store.state.with(|s| s.registry.is_empty());

    view! {
        <div class="tab-header">
            <h2>"My Presentations"</h2>
            <A href=Route::Upload.path() class="btn btn-primary">"⬆ Upload New"</A>
        </div>
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <div class="card empty-state">
                    <div class="empty-icon">"📄"</div>
                    <h3>"No presentations yet"</h3>
                    <p class="muted">"Upload your first presentation to get started"</p>
                    <A href=Route::Upload.path() class="btn btn-primary">"Upload Presentation"</A>
                </div>
            }
        >
            <div class="presentation-list">
                <For
                    each=records
                    key=|record| record.id.clone()
                    children=|record| view! { <PresentationCard record=record deletable=true/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let store = use_store();
    let current = store.state.with_untracked(|s| s.session.profile());

    let name = create_rw_signal(current.name);
    let email = create_rw_signal(current.email);
    let company = create_rw_signal(current.company);

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let notice = store.mutate(|s| {
            s.save_profile(
                &name.get_untracked(),
                &email.get_untracked(),
                &company.get_untracked(),
            )
        });
        if let Some(notice) = notice {
            store.notify(notice);
        }
    };

    view! {
        <div class="card">
            <h2>"Profile Settings"</h2>
            <form class="profile-form" on:submit=on_save>
                <TextField id="profileName" label="Full Name" icon="👤" value=name/>
                <TextField
                    id="profileEmail"
                    label="Email Address"
                    input_type="email"
                    icon="✉"
                    value=email
                />
                <TextField
                    id="profileCompany"
                    label="Company"
                    icon="🏢"
                    required=false
                    value=company
                />
                <button type="submit" class="btn btn-primary">"Save Changes"</button>
            </form>
        </div>
    }
}
