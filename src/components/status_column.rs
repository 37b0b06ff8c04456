//! Status Column Component
//!
//! One board column; doubles as the drop zone for its status.

use leptos::prelude::*;

use leptos_dragdrop::{make_on_zone_mouseenter, make_on_zone_mouseleave, DndSignals};

use crate::components::TaskCard;
use crate::drag::Column;
use crate::models::Task;

/// Column of tasks that highlights while a dragged card hovers over it
#[component]
pub fn StatusColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    dnd: DndSignals<String, Column>,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, column);
    let on_mouseleave = make_on_zone_mouseleave(dnd, column);

    let zone_class = move || {
        let mut c = String::from("status-column");
        if dnd.any_dragging() { c.push_str(" drop-ready"); }
        if dnd.is_over(&column) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section class=zone_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <h2 class="column-title">{column.title()}</h2>
            <Show
                when=move || !tasks.with(|t| t.is_empty())
                fallback=move || view! { <p class="column-empty">{column.empty_message()}</p> }
            >
                <div class="column-tasks">
                    <For
                        each=move || tasks.get()
                        key=|task| {
                            // Every displayed field, so edits re-render the card
                            (task.id.clone(), task.title.clone(), task.description.clone(), task.status)
                        }
                        children=move |task| view! { <TaskCard task=task dnd=dnd /> }
                    />
                </div>
            </Show>
        </section>
    }
}
