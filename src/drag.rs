//! Drag-and-Drop Coordinator
//!
//! Turns a finished drag gesture over the two status columns into a status
//! move. The drop zone decides the target status; dropping into the column
//! the task already sits in, or outside both columns, changes nothing.

use leptos_dragdrop::DragOutcome;

use crate::models::{Task, TaskStatus};

/// The two drop zones of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Pending,
    Completed,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::Pending, Column::Completed];

    pub fn status(self) -> TaskStatus {
        match self {
            Column::Pending => TaskStatus::Pending,
            Column::Completed => TaskStatus::Completed,
        }
    }

    pub fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Column::Pending,
            TaskStatus::Completed => Column::Completed,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Pending => "Pending Tasks",
            Column::Completed => "Completed Tasks",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Column::Pending => "No pending tasks 🎉",
            Column::Completed => "No completed tasks yet.",
        }
    }
}

/// Gesture outcome as seen by the board
pub type BoardDrag = DragOutcome<String, Column>;

/// A status change requested by a drop
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMove {
    pub id: String,
    pub to: TaskStatus,
}

/// Decide what a finished gesture means for the task list
pub fn resolve_drop(tasks: &[Task], outcome: &BoardDrag) -> Option<StatusMove> {
    let DragOutcome::Dropped { id, zone } = outcome else {
        return None;
    };
    let task = tasks.iter().find(|t| &t.id == id)?;
    (Column::for_status(task.status) != *zone).then(|| StatusMove { id: id.clone(), to: zone.status() })
}
