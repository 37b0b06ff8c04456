//! Frontend Models
//!
//! Data structures matching the task API's JSON.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Task status; the sole partition key of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    /// Also any status the API sends that this client does not know
    #[default]
    #[serde(other)]
    Pending,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// The status the server will assign on a flip. Display only.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creation time in the browser's local zone
    pub fn created_label(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Create/edit form contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    /// Both fields are required by the form
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// `GET /tasks` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub data: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupForm {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub username: String,
    pub password: String,
}

/// Login/signup success body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// Failure body; the API uses either field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}
