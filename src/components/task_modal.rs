//! Task Modal Component
//!
//! Create/edit form bound to the board's draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{use_task_board, BoardStateStoreFields, ModalState};

#[component]
pub fn TaskModal() -> impl IntoView {
    let board = use_task_board();
    let store = board.store();

    let is_open = move || store.modal().with(|m| *m != ModalState::Closed);
    let is_editing = move || store.modal().with(|m| matches!(m, ModalState::Edit(_)));
    let loading = move || store.phase().get().is_loading();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading() || !store.draft().with_untracked(|d| d.is_complete()) {
            return;
        }
        let editing = is_editing();
        spawn_local(async move {
            if editing {
                board.update().await;
            } else {
                board.create().await;
            }
        });
    };

    let close = move |_: web_sys::MouseEvent| board.edit(|s| s.close_modal());

    view! {
        <Show when=is_open>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{move || if is_editing() { "Edit Task" } else { "Create New Task" }}</h2>
                        <button class="modal-close" on:click=close>"✕"</button>
                    </div>
                    <form on:submit=on_submit>
                        <div class="form-field">
                            <label class="form-label">"Title"</label>
                            <input
                                type="text"
                                class="form-input"
                                required
                                prop:value=move || store.draft().with(|d| d.title.clone())
                                on:input=move |ev| board.update_draft(|d| d.title = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Description"</label>
                            <textarea
                                class="form-input"
                                required
                                prop:value=move || store.draft().with(|d| d.description.clone())
                                on:input=move |ev| board.update_draft(|d| d.description = event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-actions">
                            <button type="button" class="btn secondary" on:click=close>"Cancel"</button>
                            <button type="submit" class="btn primary" disabled=loading>
                                {move || match (loading(), is_editing()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update",
                                    (false, false) => "Create",
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
