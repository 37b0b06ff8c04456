//! In-memory stand-in for the task service, for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::client::ApiClient;
use super::error::{ApiError, ApiResult};
use super::task::TaskApi;
use crate::config::AppConfig;
use crate::models::{Task, TaskDraft, TaskStatus};
use crate::session::{MemoryStorage, Session};

/// Real client against `base_url` with an in-memory session
pub fn client_for(base_url: &str, token: Option<&str>) -> ApiClient {
    let storage = match token {
        Some(t) => MemoryStorage::with_token(t),
        None => MemoryStorage::default(),
    };
    ApiClient::new(AppConfig::with_base_url(base_url), Session::new(storage))
}

#[derive(Clone, Default)]
pub struct FakeTaskApi {
    tasks: Rc<RefCell<Vec<Task>>>,
    next_id: Rc<Cell<u32>>,
    fail_next: Rc<RefCell<Option<ApiError>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeTaskApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        *api.tasks.borrow_mut() = tasks;
        api
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    /// Names of the calls made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn server_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn enter(&self, call: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(call.to_string());
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn with_task<T>(&self, id: &str, f: impl FnOnce(&mut Task) -> T) -> ApiResult<T> {
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| ApiError::Status {
            status: 404,
            message: "Task not found".into(),
        })?;
        Ok(f(task))
    }
}

pub fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        status,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.enter("list")?;
        Ok(self.server_tasks())
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<()> {
        self.enter("create")?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let mut created = task(&format!("new-{}", id), &draft.title, TaskStatus::Pending);
        created.description = draft.description.clone();
        self.tasks.borrow_mut().push(created);
        Ok(())
    }

    async fn update_task(&self, id: &str, draft: &TaskDraft) -> ApiResult<()> {
        self.enter("update")?;
        self.with_task(id, |t| {
            t.title = draft.title.clone();
            t.description = draft.description.clone();
        })
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.enter("delete")?;
        self.with_task(id, |_| ())?;
        self.tasks.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn toggle_task_status(&self, id: &str) -> ApiResult<()> {
        self.enter("toggle")?;
        self.with_task(id, |t| t.status = t.status.toggled())
    }
}
