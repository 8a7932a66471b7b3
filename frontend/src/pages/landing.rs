use leptos::*;

use crate::components::{CallToAction, Features, Footer, Hero, LandingNav};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing-header">
                <LandingNav/>
            </header>
            <main class="container">
                <Hero/>
                <Features/>
                <CallToAction/>
            </main>
            <Footer/>
        </div>
    }
}
