//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::{use_toaster, FormField};
use crate::context::use_app_context;
use crate::models::LoginForm;
use crate::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let errors = validate_login(&form);
        if !errors.is_empty() {
            username_error.set(errors.username);
            password_error.set(errors.password);
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match ctx.api().login(&form).await {
                Ok(auth) => {
                    tracing::info!(username = %form.username, "logged in");
                    toaster.success(if auth.message.is_empty() { "Login successful".to_string() } else { auth.message });
                    ctx.login(&auth.token);
                    navigate("/", NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    toaster.error(e.to_string());
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Welcome Back"</h1>
            <p class="subtitle">"Sign in to manage your tasks"</p>
            <form on:submit=on_submit novalidate>
                <FormField
                    label="Username"
                    placeholder="Enter your username"
                    value=username
                    error=username_error
                />
                <FormField
                    label="Password"
                    placeholder="Enter your password"
                    input_type="password"
                    value=password
                    error=password_error
                />
                <button type="submit" class="btn primary wide" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? " <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
