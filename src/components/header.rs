//! Header Component
//!
//! Board title with the new-task and session buttons.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;

#[component]
pub fn Header(
    /// Opens the create modal
    #[prop(into)] on_create: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let session_button = move || {
        let navigate = navigate.clone();
        if ctx.authenticated.get() {
            view! {
                <button class="header-btn logout" on:click=move |_| {
                    ctx.logout();
                    navigate("/login", Default::default());
                }>
                    "Logout"
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class="header-btn login" on:click=move |_| navigate("/login", Default::default())>
                    "Login"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class="board-header">
            <div>
                <h1>"Task Manager"</h1>
                <p class="subtitle">"Organize your tasks efficiently"</p>
            </div>
            <div class="header-actions">
                <button class="header-btn primary" on:click=move |_| on_create.run(())>
                    "+ New Task"
                </button>
                {session_button}
            </div>
        </div>
    }
}
