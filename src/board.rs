//! Task Board State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The list is only ever replaced wholesale from a fresh server read; the one
//! local patch is the optimistic status change of a drag, which the following
//! refetch (or a revert on failure) reconciles.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, ApiError, TaskApi};
use crate::models::{Task, TaskDraft, TaskStatus};

/// Lifecycle of the board: `Idle -> Fetching -> Ready | Errored`,
/// with `Submitting` entered for each mutation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardPhase {
    #[default]
    Idle,
    Fetching,
    Ready,
    Submitting,
    Errored,
}

impl BoardPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, BoardPhase::Fetching | BoardPhase::Submitting)
    }
}

/// Which form modal is open
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(Task),
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tasks from the most recent successful fetch
    pub tasks: Vec<Task>,
    pub phase: BoardPhase,
    /// Single error slot, overwritten by each failure
    pub error: Option<String>,
    pub modal: ModalState,
    pub draft: TaskDraft,
    /// Task awaiting delete confirmation
    pub pending_delete: Option<Task>,
}

impl BoardState {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Enter a request phase, clearing the previous error
    fn begin(&mut self, phase: BoardPhase) {
        self.phase = phase;
        self.error = None;
    }

    fn fetched(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.phase = BoardPhase::Ready;
    }

    fn failed(&mut self, error: &ApiError) {
        if error.is_unauthorized() {
            // Session is gone and navigation is under way; show nothing stale
            self.tasks.clear();
            self.phase = BoardPhase::Idle;
            self.error = None;
        } else {
            self.phase = BoardPhase::Errored;
            self.error = Some(error.to_string());
        }
    }

    pub fn open_create(&mut self) {
        self.modal = ModalState::Create;
        self.draft = TaskDraft::default();
    }

    pub fn open_edit(&mut self, task: Task) {
        self.draft = TaskDraft::from_task(&task);
        self.modal = ModalState::Edit(task);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = TaskDraft::default();
    }

    pub fn request_delete(&mut self, task: Task) {
        self.pending_delete = Some(task);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id of the task being edited, if any
    pub fn selected_id(&self) -> Option<String> {
        match &self.modal {
            ModalState::Edit(task) => Some(task.id.clone()),
            _ => None,
        }
    }

    pub fn status_of(&self, id: &str) -> Option<TaskStatus> {
        self.tasks.iter().find(|t| t.id == id).map(|t| t.status)
    }

    /// Patch one task's status locally. Returns the previous status.
    fn set_status(&mut self, id: &str, status: TaskStatus) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        Some(std::mem::replace(&mut task.status, status))
    }
}

/// Split tasks into (pending, completed), keeping server order in each
pub fn partition(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|t| !t.status.is_completed())
}

/// Board controller: owns the store and drives API round-trips
pub struct TaskBoard<A: 'static> {
    store: Store<BoardState>,
    api: StoredValue<A, LocalStorage>,
}

impl<A: 'static> Clone for TaskBoard<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for TaskBoard<A> {}

/// The board as wired in the app
pub type AppBoard = TaskBoard<ApiClient>;

/// Get the board from context
pub fn use_task_board() -> AppBoard {
    expect_context::<AppBoard>()
}

impl<A: TaskApi + Clone + 'static> TaskBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            store: Store::new(BoardState::default()),
            api: StoredValue::new_local(api),
        }
    }

    pub fn store(&self) -> Store<BoardState> {
        self.store
    }

    /// Snapshot of the current state
    #[cfg(test)]
    pub fn state(&self) -> BoardState {
        self.store.get_untracked()
    }

    /// Apply a synchronous UI transition (modal open/close, etc.)
    pub fn edit(&self, f: impl FnOnce(&mut BoardState)) {
        self.store.update(f);
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut TaskDraft)) {
        self.store.update(|s| f(&mut s.draft));
    }

    // The store and api may be disposed while a request is in flight
    // (board unmounted by a 401 redirect); writes after that are dropped.

    fn api(&self) -> Option<A> {
        self.api.try_get_value()
    }

    fn apply(&self, f: impl FnOnce(&mut BoardState)) {
        self.store.try_update(f);
    }

    fn read<T>(&self, f: impl FnOnce(&BoardState) -> T) -> Option<T> {
        self.store.try_with_untracked(f)
    }

    /// Replace the task list with the server's current set
    pub async fn fetch(&self) {
        let Some(api) = self.api() else { return };
        self.apply(|s| s.begin(BoardPhase::Fetching));
        match api.list_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "tasks fetched");
                self.apply(|s| s.fetched(tasks));
            }
            Err(e) => self.apply(|s| s.failed(&e)),
        }
    }

    /// Submit the draft as a new task
    pub async fn create(&self) {
        let (Some(api), Some(draft)) = (self.api(), self.read(|s| s.draft.clone())) else { return };
        self.apply(|s| s.begin(BoardPhase::Submitting));
        match api.create_task(&draft).await {
            Ok(()) => {
                self.fetch().await;
                self.apply(BoardState::close_modal);
            }
            Err(e) => self.apply(|s| s.failed(&e)),
        }
    }

    /// Submit the draft over the selected task. No-op without a selection.
    pub async fn update(&self) {
        let Some(api) = self.api() else { return };
        let Some((id, draft)) = self.read(|s| s.selected_id().map(|id| (id, s.draft.clone()))).flatten() else {
            return;
        };
        self.apply(|s| s.begin(BoardPhase::Submitting));
        match api.update_task(&id, &draft).await {
            Ok(()) => {
                self.fetch().await;
                self.apply(BoardState::close_modal);
            }
            Err(e) => self.apply(|s| s.failed(&e)),
        }
    }

    pub async fn delete(&self, id: String) {
        let Some(api) = self.api() else { return };
        self.apply(|s| s.begin(BoardPhase::Submitting));
        match api.delete_task(&id).await {
            Ok(()) => {
                self.fetch().await;
                self.apply(BoardState::cancel_delete);
            }
            Err(e) => self.apply(|s| s.failed(&e)),
        }
    }

    /// Ask the server to flip the task's status, then refetch
    pub async fn toggle_status(&self, id: String) {
        let Some(api) = self.api() else { return };
        if let Some(Some(current)) = self.read(|s| s.status_of(&id)) {
            tracing::debug!(%id, to = current.toggled().as_str(), "toggling status");
        }
        self.apply(|s| s.begin(BoardPhase::Submitting));
        match api.toggle_task_status(&id).await {
            Ok(()) => self.fetch().await,
            Err(e) => self.apply(|s| s.failed(&e)),
        }
    }

    /// Move a task into `target` with an optimistic local patch.
    /// Returns false (and does nothing) if the task is unknown or already there.
    pub async fn move_to(&self, id: String, target: TaskStatus) -> bool {
        let Some(api) = self.api() else { return false };
        let Some(Some(current)) = self.read(|s| s.status_of(&id)) else { return false };
        if current == target {
            return false;
        }

        self.apply(|s| {
            s.set_status(&id, target);
            s.begin(BoardPhase::Submitting);
        });
        match api.toggle_task_status(&id).await {
            Ok(()) => self.fetch().await,
            Err(e) => {
                tracing::error!(%id, error = %e, "status move failed, reverting");
                self.apply(|s| {
                    s.set_status(&id, current);
                    s.failed(&e);
                });
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::fake::{task, FakeTaskApi};

    fn board_with(tasks: Vec<Task>) -> (TaskBoard<FakeTaskApi>, FakeTaskApi) {
        let api = FakeTaskApi::with_tasks(tasks);
        (TaskBoard::new(api.clone()), api)
    }

    fn sample() -> Vec<Task> {
        vec![
            task("a", "Write report", TaskStatus::Pending),
            task("b", "Book flights", TaskStatus::Completed),
            task("c", "Call plumber", TaskStatus::Pending),
        ]
    }

    #[test]
    fn test_partition_covers_each_task_once() {
        let tasks = sample();
        let (pending, completed) = partition(&tasks);

        let ids = |v: &[Task]| v.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&pending), vec!["a", "c"]);
        assert_eq!(ids(&completed), vec!["b"]);
        assert_eq!(pending.len() + completed.len(), tasks.len());
        assert!(pending.iter().all(|p| !completed.iter().any(|c| c.id == p.id)));
    }

    #[test]
    fn test_fetch_replaces_list() {
        let (board, _) = board_with(sample());
        assert_eq!(board.state().phase, BoardPhase::Idle);

        block_on(board.fetch());

        let state = board.state();
        assert_eq!(state.phase, BoardPhase::Ready);
        assert_eq!(state.tasks.len(), 3);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_create_then_fetch_contains_pending_task() {
        let (board, api) = board_with(vec![]);
        board.edit(BoardState::open_create);
        board.update_draft(|d| {
            d.title = "Buy milk".into();
            d.description = "2%".into();
        });

        block_on(board.create());

        let state = board.state();
        let created = state.tasks.iter().find(|t| t.title == "Buy milk").expect("task listed");
        assert_eq!(created.description, "2%");
        assert_eq!(created.status, TaskStatus::Pending);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.draft, TaskDraft::default());
        assert_eq!(api.calls(), vec!["create", "list"]);
    }

    #[test]
    fn test_failed_create_keeps_modal_and_sets_error() {
        let (board, api) = board_with(vec![]);
        board.edit(BoardState::open_create);
        board.update_draft(|d| d.title = "Draft".into());
        api.fail_next(ApiError::Status { status: 400, message: "Description is required".into() });

        block_on(board.create());

        let state = board.state();
        assert_eq!(state.phase, BoardPhase::Errored);
        assert_eq!(state.error.as_deref(), Some("Description is required"));
        assert_eq!(state.modal, ModalState::Create);
        assert_eq!(state.draft.title, "Draft");
    }

    #[test]
    fn test_new_call_clears_previous_error() {
        let (board, api) = board_with(sample());
        api.fail_next(ApiError::Network("offline".into()));
        block_on(board.fetch());
        assert!(board.state().error.is_some());

        block_on(board.fetch());
        assert_eq!(board.state().error, None);
        assert_eq!(board.state().phase, BoardPhase::Ready);
    }

    #[test]
    fn test_update_without_selection_is_noop() {
        let (board, api) = board_with(sample());
        board.edit(BoardState::open_create);

        block_on(board.update());

        assert!(api.calls().is_empty());
        assert_eq!(board.state().phase, BoardPhase::Idle);
    }

    #[test]
    fn test_update_selected_task() {
        let (board, api) = board_with(sample());
        block_on(board.fetch());
        let target = board.state().tasks[0].clone();
        board.edit(|s| s.open_edit(target));
        assert_eq!(board.state().draft.title, "Write report");
        board.update_draft(|d| d.title = "Write final report".into());

        block_on(board.update());

        assert_eq!(api.server_tasks()[0].title, "Write final report");
        assert_eq!(board.state().tasks[0].title, "Write final report");
        assert_eq!(board.state().modal, ModalState::Closed);
    }

    #[test]
    fn test_delete_then_fetch_omits_id() {
        let (board, _) = board_with(sample());
        block_on(board.fetch());
        let doomed = board.state().tasks[1].clone();
        board.edit(|s| s.request_delete(doomed));

        block_on(board.delete("b".into()));

        let state = board.state();
        assert!(state.tasks.iter().all(|t| t.id != "b"));
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn test_failed_delete_keeps_confirmation_open() {
        let (board, api) = board_with(sample());
        board.edit(|s| s.request_delete(task("b", "Book flights", TaskStatus::Completed)));
        api.fail_next(ApiError::Status { status: 500, message: "boom".into() });

        block_on(board.delete("b".into()));

        assert!(board.state().pending_delete.is_some());
        assert_eq!(board.state().error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_double_toggle_restores_status() {
        let (board, _) = board_with(sample());
        block_on(board.fetch());

        block_on(board.toggle_status("a".into()));
        assert_eq!(board.state().status_of("a"), Some(TaskStatus::Completed));
        block_on(board.toggle_status("a".into()));

        let state = board.state();
        let a = state.tasks.iter().find(|t| t.id == "a").unwrap();
        assert_eq!(a.status, TaskStatus::Pending);
        assert_eq!(a.id, "a");
    }

    #[test]
    fn test_unauthorized_shows_no_error() {
        let (board, api) = board_with(sample());
        block_on(board.fetch());
        api.fail_next(ApiError::Unauthorized("expired".into()));

        block_on(board.toggle_status("a".into()));

        let state = board.state();
        assert_eq!(state.error, None);
        assert_eq!(state.phase, BoardPhase::Idle);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_move_to_same_status_is_noop() {
        let (board, api) = board_with(sample());
        block_on(board.fetch());

        assert!(!block_on(board.move_to("a".into(), TaskStatus::Pending)));
        assert!(!block_on(board.move_to("missing".into(), TaskStatus::Completed)));
        assert_eq!(api.calls(), vec!["list"]);
    }

    #[test]
    fn test_move_to_other_column() {
        let (board, api) = board_with(sample());
        block_on(board.fetch());

        assert!(block_on(board.move_to("b".into(), TaskStatus::Pending)));

        assert_eq!(board.state().status_of("b"), Some(TaskStatus::Pending));
        assert_eq!(api.calls(), vec!["list", "toggle", "list"]);
    }

    #[test]
    fn test_failed_move_reverts_optimistic_patch() {
        let (board, api) = board_with(sample());
        block_on(board.fetch());
        api.fail_next(ApiError::Network("offline".into()));

        block_on(board.move_to("a".into(), TaskStatus::Completed));

        let state = board.state();
        assert_eq!(state.status_of("a"), Some(TaskStatus::Pending));
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn test_modal_transitions() {
        let mut state = BoardState::default();
        let t = task("x", "Title", TaskStatus::Pending);

        state.open_edit(t.clone());
        assert_eq!(state.selected_id().as_deref(), Some("x"));
        assert_eq!(state.draft.title, "Title");

        state.close_modal();
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.draft, TaskDraft::default());

        state.open_create();
        assert_eq!(state.modal, ModalState::Create);
    }
}
