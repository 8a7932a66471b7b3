//! Login and signup screens.
//!
//! Both drive the shared `AuthPhase` machine: the phase enters `Submitting`
//! synchronously on submit (which disables the button), the simulated
//! attempt runs on the event loop, and success navigates exactly once.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;
use std::future::Future;
use zipslides::{login, signup, AppConfig, AuthPhase, AuthResult, AuthSuccess, LoginForm, Notice, Route, SignupForm};

use crate::components::{BackLink, Brand, PasswordField, Spinner, TextField};
use crate::services::BrowserClock;
use crate::store::{use_store, AppStore};

/// Run one attempt through the phase machine.
fn submit_auth<F, Fut, N>(store: AppStore, phase: RwSignal<AuthPhase>, navigate: N, attempt: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = AuthResult<AuthSuccess>> + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    let next = match phase.get_untracked().begin() {
        Ok(next) => next,
        Err(e) => {
            log::debug!("Submit ignored: {}", e);
            return;
        }
    };
    phase.set(next);

    let fut = attempt();
    spawn_local(async move {
        let result = fut.await;
        phase.update(|p| *p = p.settle(&result));

        match result {
            Ok(success) => {
                if let Some(notice) = store.mutate(|s| s.apply_auth(&success)) {
                    store.notify(notice);
                }
                navigate(success.redirect.path(), Default::default());
            }
            Err(e) => store.notify(Notice::error(e.user_message())),
        }
    });
}

/// Card shell shared by both forms.
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-column">
                <BackLink/>
                <div class="card auth-card">
                    <div class="auth-header">
                        <Brand/>
                        <h1>{title}</h1>
                        <p class="muted">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let phase = create_rw_signal(AuthPhase::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm::new(email.get_untracked(), password.get_untracked());
        submit_auth(store, phase, navigate.clone(), move || async move {
            login(&BrowserClock, &AppConfig::default(), &form).await
        });
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to your account to continue">
            <form class="auth-form" on:submit=on_submit>
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your email"
                    icon="✉"
                    value=email
                />
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Enter your password"
                    value=password
                />
                <div class="form-row">
                    <label class="checkbox">
                        <input type="checkbox"/>
                        <span>"Remember me"</span>
                    </label>
                    <a href="#" class="link">"Forgot password?"</a>
                </div>
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || phase.get().is_busy()
                >
                    {move || if phase.get().is_busy() {
                        view! { <Spinner label="Signing in..."/> }.into_view()
                    } else {
                        "Sign In".into_view()
                    }}
                </button>
            </form>
            <div class="divider"><span>"or"</span></div>
            <p class="auth-switch">
                "Don't have an account? "
                <A href=Route::Signup.path() class="link">"Sign up"</A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let phase = create_rw_signal(AuthPhase::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        submit_auth(store, phase, navigate.clone(), move || async move {
            signup(&BrowserClock, &AppConfig::default(), &form).await
        });
    };

    view! {
        <AuthCard title="Create Account" subtitle="Join Zipslides and start sharing presentations">
            <form class="auth-form" on:submit=on_submit>
                <TextField
                    id="name"
                    label="Full Name"
                    placeholder="Enter your full name"
                    icon="👤"
                    value=name
                />
                <TextField
                    id="email"
                    label="Email Address"
                    input_type="email"
                    placeholder="Enter your email"
                    icon="✉"
                    value=email
                />
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Create a password"
                    value=password
                />
                <PasswordField
                    id="confirmPassword"
                    label="Confirm Password"
                    placeholder="Confirm your password"
                    value=confirm_password
                />
                <label class="checkbox">
                    <input type="checkbox" id="terms" required=true/>
                    <span>"I agree to the Terms of Service and Privacy Policy"</span>
                </label>
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || phase.get().is_busy()
                >
                    {move || if phase.get().is_busy() {
                        view! { <Spinner label="Creating account..."/> }.into_view()
                    } else {
                        "Create Account".into_view()
                    }}
                </button>
            </form>
            <div class="divider"><span>"or"</span></div>
            <p class="auth-switch">
                "Already have an account? "
                <A href=Route::Login.path() class="link">"Sign in"</A>
            </p>
        </AuthCard>
    }
}
