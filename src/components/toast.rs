//! Toast Notifications
//!
//! Transient success/error messages for the auth pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen, in ms
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for raising toasts, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Replace any visible toast; it clears itself unless replaced again
    fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Toast { id, kind, message }));

        let current = self.current;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            current.try_update(|slot| {
                if slot.as_ref().is_some_and(|t| t.id == id) {
                    *slot = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the active toast, if any
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    move || {
        toaster.current.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status" on:click=move |_| toaster.dismiss()>
                    {toast.message}
                </div>
            }
        })
    }
}
