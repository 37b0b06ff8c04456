//! Delete Confirm Modal Component
//!
//! Asks before deleting the task held in `pending_delete`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{use_task_board, BoardStateStoreFields};

#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let board = use_task_board();
    let store = board.store();
    let loading = move || store.phase().get().is_loading();

    move || {
        store.pending_delete().get().map(|task| {
            let id = task.id.clone();
            view! {
                <div class="modal-backdrop">
                    <div class="modal confirm">
                        <h2>"Delete Task"</h2>
                        <p class="confirm-text">
                            "Are you sure you want to delete " <strong>{task.title.clone()}</strong> "?"
                        </p>
                        <div class="modal-actions">
                            <button
                                class="btn secondary"
                                on:click=move |_| board.edit(|s| s.cancel_delete())
                            >
                                "Cancel"
                            </button>
                            <button
                                class="btn danger"
                                disabled=loading
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    let id = id.clone();
                                    spawn_local(async move { board.delete(id).await });
                                }
                            >
                                {move || if loading() { "Deleting..." } else { "Delete" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
