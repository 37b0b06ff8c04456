//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_modal;
mod form_field;
mod header;
mod status_column;
mod task_card;
mod task_modal;
mod toast;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use form_field::FormField;
pub use header::Header;
pub use status_column::StatusColumn;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
pub use toast::{use_toaster, ToastHost, Toaster};
