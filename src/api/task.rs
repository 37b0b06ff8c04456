//! Task Endpoints
//!
//! Bindings for the `/tasks` routes.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{encode_segment, ApiClient};
use super::error::ApiResult;
use crate::models::{Task, TaskDraft, TaskListResponse};

/// Task operations the board depends on
#[async_trait(?Send)]
pub trait TaskApi {
    /// Full current task set
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<()>;

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ApiResult<()>;

    async fn delete_task(&self, id: &str) -> ApiResult<()>;

    /// Flip the status server-side; no body is sent
    async fn toggle_task_status(&self, id: &str) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let response: TaskListResponse = self.send_json(self.request(Method::GET, "/tasks")).await?;
        Ok(response.data)
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<()> {
        let request = self.request(Method::POST, "/tasks/create-task").json(draft);
        self.send_empty(request).await
    }

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ApiResult<()> {
        let path = format!("/tasks/edit/{}", encode_segment(id));
        self.send_empty(self.request(Method::PUT, &path).json(draft)).await
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        let path = format!("/tasks/delete/{}", encode_segment(id));
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    async fn toggle_task_status(&self, id: &str) -> ApiResult<()> {
        let path = format!("/tasks/update-status/{}", encode_segment(id));
        self.send_empty(self.request(Method::PATCH, &path)).await
    }
}
