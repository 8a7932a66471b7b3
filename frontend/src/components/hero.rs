//! Landing page sections: hero, feature cards, call to action.

use leptos::*;
use leptos_router::*;
use zipslides::{Route, APP_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>
                <span class="gradient-text">"Share Presentations"</span>
                <br/>
                "Instantly"
            </h1>
            <p class="subtitle">
                "Upload your PPT or PDF presentations and get a custom public link "
                "to share with anyone, anywhere."
            </p>
            <div class="hero-actions">
                <A href=Route::Signup.path() class="btn btn-primary btn-large">"Start Sharing →"</A>
                <A href=Route::Upload.path() class="btn btn-secondary btn-large">"Try Upload"</A>
            </div>
        </section>
    }
}

/// Icon, title, text.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="section-header">
                <h2>"Why Choose " {APP_NAME} "?"</h2>
                <p>"Powerful features to make sharing presentations effortless"</p>
            </div>
            <div class="feature-grid">
                <FeatureCard
                    icon="⬆"
                    title="Easy Upload"
                    text="Drag and drop your PPT or PDF files. We support all major presentation formats."
                />
                <FeatureCard
                    icon="🔗"
                    title="Instant Sharing"
                    text="Get a custom public link instantly. Share with anyone, no registration required."
                />
                <FeatureCard
                    icon="🌍"
                    title="Global Access"
                    text="Your presentations are accessible worldwide. Perfect for remote teams and clients."
                />
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <h2>"Ready to Start Sharing?"</h2>
            <p>
                "Join thousands of professionals who trust " {APP_NAME}
                " for their presentation sharing needs."
            </p>
            <A href=Route::Signup.path() class="btn btn-primary btn-large">"Create Free Account →"</A>
        </section>
    }
}
