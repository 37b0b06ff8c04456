//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop between named drop zones using mouse events.
//! Uses movement threshold to distinguish click from drag.

mod listeners;
mod machine;

pub use listeners::{Detach, DocumentListener, ListenerGuard};
pub use machine::{DragMachine, DragOutcome, DragPhase, DRAG_THRESHOLD_PX};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Bounds for draggable item identifiers
pub trait DndKey: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
impl<T: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static> DndKey for T {}

/// Bounds for drop zone identifiers
pub trait DndZone: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
impl<T: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static> DndZone for T {}

/// How long `drag_just_ended` stays set after a drop, in ms
const JUST_ENDED_MS: i32 = 100;

/// DnD state signals
pub struct DndSignals<K: 'static, Z: 'static> {
    pub machine: RwSignal<DragMachine<K, Z>>,
    /// Set briefly after a drag ends so click handlers can ignore the release
    pub drag_just_ended: RwSignal<bool>,
}

impl<K: 'static, Z: 'static> Clone for DndSignals<K, Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, Z: 'static> Copy for DndSignals<K, Z> {}

impl<K: DndKey, Z: DndZone> DndSignals<K, Z> {
    /// Whether `id` is the item being dragged (tracked)
    pub fn is_dragging(&self, id: &K) -> bool {
        self.machine.with(|m| m.dragging_id() == Some(id))
    }

    /// Whether any drag is active (tracked)
    pub fn any_dragging(&self) -> bool {
        self.machine.with(|m| m.is_dragging())
    }

    /// Whether the pointer is over `zone` during a drag (tracked)
    pub fn is_over(&self, zone: &Z) -> bool {
        self.machine.with(|m| m.hovered_zone() == Some(zone))
    }
}

pub fn create_dnd_signals<K: DndKey, Z: DndZone>() -> DndSignals<K, Z> {
    DndSignals {
        machine: RwSignal::new(DragMachine::new()),
        drag_just_ended: RwSignal::new(false),
    }
}

/// Mark the drag as just ended, clearing the flag after a short delay
fn end_drag<K: DndKey, Z: DndZone>(dnd: &DndSignals<K, Z>) {
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            JUST_ENDED_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for a drag handle.
/// Records a pending drag with the start position.
pub fn make_on_mousedown<K: DndKey, Z: DndZone>(
    dnd: DndSignals<K, Z>,
    id: K,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls keep their own pointer behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        ev.prevent_default();
        let (x, y) = (ev.client_x(), ev.client_y());
        dnd.machine.try_update(|m| m.pointer_down(id.clone(), x, y));
    }
}

/// Create mouseenter handler for a drop zone
pub fn make_on_zone_mouseenter<K: DndKey, Z: DndZone>(
    dnd: DndSignals<K, Z>,
    zone: Z,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.machine.try_with_untracked(|m| m.is_dragging()).unwrap_or(false);
        if dragging {
            dnd.machine.try_update(|m| m.enter_zone(zone.clone()));
        }
    }
}

/// Create mouseleave handler for a drop zone
pub fn make_on_zone_mouseleave<K: DndKey, Z: DndZone>(
    dnd: DndSignals<K, Z>,
    zone: Z,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let hovered = dnd
            .machine
            .try_with_untracked(|m| m.hovered_zone() == Some(&zone))
            .unwrap_or(false);
        if hovered {
            dnd.machine.try_update(|m| m.leave_zone(&zone));
        }
    }
}

/// Document mousemove listener - starts the drag once moved past the threshold
fn global_mousemove<K: DndKey, Z: DndZone>(dnd: DndSignals<K, Z>) -> DocumentListener {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Work on a copy so plain mouse movement never notifies subscribers
        let Some(mut next) = dnd.machine.try_get_untracked() else { return };
        if next.pointer_move(ev.client_x(), ev.client_y()) {
            tracing::debug!(id = ?next.dragging_id(), "drag started");
            dnd.machine.try_set(next);
        }
    });

    DocumentListener::attach("mousemove", on_mousemove)
}

/// Bind global mouseup (drop detection) and mousemove handlers.
///
/// `on_outcome` receives every finished gesture, including clicks and
/// cancelled drags. Both listeners stay on the document until the returned
/// guard is dropped; keep it alive for as long as the view that owns `dnd`.
pub fn bind_global_mouseup<K, Z, F>(dnd: DndSignals<K, Z>, on_outcome: F) -> ListenerGuard
where
    K: DndKey,
    Z: DndZone,
    F: Fn(DragOutcome<K, Z>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let idle = dnd
            .machine
            .try_with_untracked(|m| matches!(m.phase(), DragPhase::Idle))
            .unwrap_or(true);
        if idle {
            return;
        }

        let Some(Some(outcome)) = dnd.machine.try_update(|m| m.pointer_up()) else { return };
        if !matches!(outcome, DragOutcome::Click(_)) {
            end_drag(&dnd);
        }
        tracing::debug!(?outcome, "drag gesture finished");
        on_outcome(outcome);
    });

    ListenerGuard::new(vec![
        DocumentListener::attach("mouseup", on_mouseup),
        global_mousemove(dnd),
    ])
}
