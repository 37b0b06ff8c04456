//! Signup Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::{use_toaster, FormField};
use crate::context::use_app_context;
use crate::models::SignupForm;
use crate::validation::validate_signup;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = SignupForm {
            full_name: full_name.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let errors = validate_signup(&form);
        if !errors.is_empty() {
            full_name_error.set(errors.full_name);
            username_error.set(errors.username);
            password_error.set(errors.password);
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.api().signup(&form).await {
                Ok(auth) => {
                    tracing::info!(username = %form.username, "account created");
                    toaster.success(if auth.message.is_empty() { "Signup successful".to_string() } else { auth.message });
                    ctx.login(&auth.token);
                    navigate("/", NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "signup failed");
                    toaster.error(e.to_string());
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Create Account"</h1>
            <p class="subtitle">"Sign up to start organizing your tasks"</p>
            <form on:submit=on_submit novalidate>
                <FormField
                    label="Full Name"
                    placeholder="Enter your full name"
                    value=full_name
                    error=full_name_error
                />
                <FormField
                    label="Username"
                    placeholder="Choose a username"
                    value=username
                    error=username_error
                />
                <FormField
                    label="Password"
                    placeholder="Create a password"
                    input_type="password"
                    value=password
                    error=password_error
                />
                <button type="submit" class="btn primary wide" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
