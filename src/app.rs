//! Task Board App
//!
//! Wires the session, API client and router together.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{path, NavigateOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::{ToastHost, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AuthLayout, LoginPage, SignupPage, TaskBoardPage};
use crate::session::{BrowserStorage, Session};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Toaster::new());

    view! {
        <Router>
            <AppShell />
        </Router>
    }
}

/// Everything that needs the router (navigation on 401)
#[component]
fn AppShell() -> impl IntoView {
    let navigate = use_navigate();

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "starting task board");

    let session = Session::new(BrowserStorage::new(config.token_key.clone()));
    let api = ApiClient::new(config.clone(), session).with_unauthorized_handler(move || {
        navigate("/login", NavigateOptions { replace: true, ..Default::default() });
    });
    let ctx = AppContext::new(config, api);
    provide_context(ctx);
    watch_other_tabs(ctx.session(), ctx.config().token_key);

    view! {
        <main class="app">
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=TaskBoardPage />
                <Route
                    path=path!("/login")
                    view=|| view! { <AuthLayout><LoginPage /></AuthLayout> }
                />
                <Route
                    path=path!("/signup")
                    view=|| view! { <AuthLayout><SignupPage /></AuthLayout> }
                />
            </Routes>
            <ToastHost />
        </main>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to your tasks"</a>
        </div>
    }
}

/// Re-check the session when another tab changes the stored token
fn watch_other_tabs(session: Session, key: String) {
    let Some(win) = web_sys::window() else { return };

    let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        // key() is None when the whole storage was cleared
        if ev.key().map_or(true, |k| k == key) {
            let authenticated = session.check_auth();
            tracing::debug!(authenticated, "token changed in another tab");
        }
    });
    let _ = win.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
    on_storage.forget();
}
