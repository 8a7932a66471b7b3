//! Labelled form inputs for the auth screens.

use leptos::*;

/// Text/email input bound to `value`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "")] icon: &'static str,
    #[prop(default = true)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id class="field-label">{label}</label>
            <div class="field-input">
                <span class="field-icon">{icon}</span>
                <input
                    id=id
                    name=id
                    type=input_type
                    class="input-field with-icon"
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div class="field">
            <label for=id class="field-label">{label}</label>
            <div class="field-input">
                <span class="field-icon">"🔒"</span>
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class="input-field with-icon with-toggle"
                    placeholder=placeholder
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="field-toggle"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
        </div>
    }
}
