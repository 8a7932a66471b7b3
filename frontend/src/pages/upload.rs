//! Upload screen: drop zone plus the presentations uploaded this session.

use leptos::*;

use crate::components::{FeatureCard, PresentationCard, UploadNav, UploadZone};
use crate::store::use_store;

#[component]
pub fn UploadPage() -> impl IntoView {
    let store = use_store();
    let uploads = move || store.state.with(|s| s.session_uploads());
    let has_uploads = move || store.state.with(|s| s.registry.iter().any(|r| r.local_url.is_some()));

    view! {
        <div class="upload-page">
            <header class="page-header">
                <UploadNav/>
            </header>
            <main class="container narrow">
                <div class="section-header">
                    <h1>"Upload Your Presentations"</h1>
                    <p>"Upload PPT or PDF files and get instant shareable links"</p>
                </div>

                <UploadZone/>

                <Show when=has_uploads fallback=|| view! {}>
                    <section class="session-uploads">
                        <h2>"Your Presentations"</h2>
                        <For
                            each=uploads
                            key=|record| record.id.clone()
                            children=|record| view! { <PresentationCard record=record/> }
                        />
                    </section>
                </Show>

                <div class="feature-grid">
                    <FeatureCard
                        icon="🔗"
                        title="Instant Links"
                        text="Get shareable links immediately after upload"
                    />
                    <FeatureCard
                        icon="🌍"
                        title="Global Access"
                        text="Share with anyone, anywhere in the world"
                    />
                    <FeatureCard
                        icon="📄"
                        title="Multiple Formats"
                        text="Support for PPT, PPTX, and PDF files"
                    />
                </div>
            </main>
        </div>
    }
}
