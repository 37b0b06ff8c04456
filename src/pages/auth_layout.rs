//! Auth Layout
//!
//! Wraps the login and signup pages; signed-in visitors are sent to the board.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_app_context;

#[component]
pub fn AuthLayout(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if ctx.authenticated.get() {
            navigate("/", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <div class="auth-layout">
            <Show
                when=move || !ctx.authenticated.get()
                fallback=|| view! { <p class="auth-checking">"Checking authentication..."</p> }
            >
                {children()}
            </Show>
        </div>
    }
}
