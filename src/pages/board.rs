//! Task Board Page
//!
//! The two status columns, the modals and the drag wiring.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::board::{partition, BoardStateStoreFields, TaskBoard};
use crate::components::{DeleteConfirmModal, Header, StatusColumn, TaskModal};
use crate::context::use_app_context;
use crate::drag::{resolve_drop, Column};

#[component]
pub fn TaskBoardPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let board = TaskBoard::new(ctx.api());
    provide_context(board);
    let store = board.store();

    // Refetch on sign-in, leave on sign-out
    Effect::new(move |_| {
        if ctx.authenticated.get() {
            spawn_local(async move { board.fetch().await });
        } else {
            navigate("/login", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let dnd = create_dnd_signals::<String, Column>();
    // Owned by the page: the document listeners go away when it unmounts
    let listeners = bind_global_mouseup(dnd, move |outcome| {
        let step = store
            .try_with_untracked(|s| resolve_drop(&s.tasks, &outcome))
            .flatten();
        if let Some(step) = step {
            tracing::info!(id = %step.id, to = step.to.as_str(), "task dropped on column");
            spawn_local(async move {
                board.move_to(step.id, step.to).await;
            });
        }
    });
    let _listeners = StoredValue::new_local(listeners);

    let columns = Memo::new(move |_| store.tasks().with(|tasks| partition(tasks)));
    let pending = Signal::derive(move || columns.with(|(p, _)| p.clone()));
    let completed = Signal::derive(move || columns.with(|(_, c)| c.clone()));

    let loading = move || store.phase().get().is_loading();
    let has_tasks = move || store.tasks().with(|t| !t.is_empty());

    view! {
        <div class="board-page">
            <Header on_create=move |_| board.edit(|s| s.open_create()) />

            {move || store.error().get().map(|message| view! {
                <div class="error-banner" role="alert">{message}</div>
            })}

            <Show
                when=move || has_tasks() || !loading()
                fallback=|| view! {
                    <div class="board-loading">
                        <div class="spinner"></div>
                        <p>"Loading tasks..."</p>
                    </div>
                }
            >
                <Show when=move || !has_tasks() && !loading()>
                    <div class="board-empty">
                        <p>"No tasks yet. Create your first task!"</p>
                    </div>
                </Show>
                <div class="board-columns">
                    {Column::ALL.map(|column| {
                        let tasks = match column {
                            Column::Pending => pending,
                            Column::Completed => completed,
                        };
                        view! { <StatusColumn column=column tasks=tasks dnd=dnd /> }
                    })}
                </div>
            </Show>

            <TaskModal />
            <DeleteConfirmModal />
        </div>
    }
}
