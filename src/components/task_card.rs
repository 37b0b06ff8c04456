//! Task Card Component
//!
//! One task with its status toggle, edit/delete buttons and drag handle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::board::use_task_board;
use crate::drag::Column;
use crate::models::Task;

#[component]
pub fn TaskCard(task: Task, dnd: DndSignals<String, Column>) -> impl IntoView {
    let board = use_task_board();

    let id = task.id.clone();
    let completed = task.status.is_completed();
    let created = task.created_label();
    let on_grip_mousedown = make_on_mousedown(dnd, id.clone());

    let is_dragging = {
        let id = id.clone();
        move || dnd.is_dragging(&id)
    };
    let card_class = {
        let is_dragging = is_dragging.clone();
        move || if is_dragging() { "task-card dragging" } else { "task-card" }
    };
    let card_style = move || {
        if is_dragging() {
            "opacity: 0.5; cursor: grabbing;"
        } else {
            "opacity: 1; cursor: grab;"
        }
    };

    let on_toggle = {
        let id = id.clone();
        move |_| {
            // A release over the card right after a drag is not a click
            if dnd.drag_just_ended.get_untracked() {
                return;
            }
            let id = id.clone();
            spawn_local(async move { board.toggle_status(id).await });
        }
    };

    let on_edit = {
        let task = task.clone();
        move |_| {
            let task = task.clone();
            board.edit(|s| s.open_edit(task));
        }
    };

    let on_delete = {
        let task = task.clone();
        move |_| {
            let task = task.clone();
            board.edit(|s| s.request_delete(task));
        }
    };

    let done_class = if completed { " done" } else { "" };
    let toggle_title = if completed { "Mark as pending" } else { "Mark as completed" };
    let toggle_mark = if completed { "✓" } else { "" };

    view! {
        <div class=card_class style=card_style>
            <div class="task-card-main">
                <div class="task-card-heading">
                    <span class="drag-handle" title="Drag to move" on:mousedown=on_grip_mousedown>
                        "⋮⋮"
                    </span>
                    <button
                        class=format!("status-toggle{}", done_class)
                        title=toggle_title
                        on:click=on_toggle
                    >
                        {toggle_mark}
                    </button>
                    <h3 class=format!("task-title{}", done_class)>{task.title.clone()}</h3>
                    <span class=format!("status-badge {}", task.status.as_str())>
                        {task.status.as_str()}
                    </span>
                </div>
                <p class=format!("task-description{}", done_class)>{task.description.clone()}</p>
                <div class="task-created">"Created: " {created}</div>
            </div>
            <div class="task-card-actions">
                <button class="icon-btn edit" title="Edit" on:click=on_edit>"✎"</button>
                <button class="icon-btn delete" title="Delete" on:click=on_delete>"🗑"</button>
            </div>
        </div>
    }
}
