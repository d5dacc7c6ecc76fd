//! The TodoApp control loop: state mutations and remote operations.
//!
//! # Design
//! Every mutating operation is a blocking remote call; on success the full
//! collection is re-fetched and the snapshot replaced wholesale. Remote
//! failures are logged through the `log` facade and swallowed — the prior
//! state stays in place, the busy flag clears, and the view renders no
//! error. The only synchronous user notice is the empty-title rejection.

use std::fmt;

use log::{error, warn};
use todo_core::{ApiError, CreateTodo, HttpRequest, HttpResponse, TodoClient, UpdateTodo};
use uuid::Uuid;

use crate::state::{AppState, Mode};
use crate::transport::{Transport, TransportError};

/// Synchronous result of `submit`, for the caller to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was created; the form was cleared.
    Created,
    /// The edited record was replaced; pointer and form were cleared.
    Updated,
    /// Title was empty — no request was made, the user must be notified.
    TitleRequired,
    /// The remote call failed; form (and pointer, if editing) kept for retry.
    Failed,
    /// A call is already in flight; nothing was done.
    Busy,
}

/// A remote call that did not produce the expected result, either because
/// the transport failed or because the response did not parse.
#[derive(Debug)]
enum RemoteError {
    Transport(TransportError),
    Api(ApiError),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(err) => err.fmt(f),
            RemoteError::Api(err) => err.fmt(f),
        }
    }
}

/// The todo-list client component.
pub struct TodoApp<T: Transport> {
    client: TodoClient,
    transport: T,
    state: AppState,
}

impl<T: Transport> TodoApp<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // --- form input ---

    pub fn set_title(&mut self, title: String) {
        self.state.form.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.state.form.description = description;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.state.form.completed = completed;
    }

    // --- sync engine ---

    /// Re-fetch the full collection and replace the local snapshot.
    ///
    /// On failure the previous snapshot stays in place; the failure is
    /// logged and not surfaced to the view.
    pub fn refresh(&mut self) {
        let req = self.client.build_list_todos();
        match self.call(req, |client, resp| client.parse_list_todos(resp)) {
            Ok(todos) => self.state.todos = todos,
            Err(err) => error!("failed to fetch todos: {err}"),
        }
    }

    // --- mutations ---

    /// Routes by mode: create in `Idle`, full-replace update in `Editing`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.busy {
            return SubmitOutcome::Busy;
        }
        match &self.state.mode {
            Mode::Idle => self.create(),
            Mode::Editing(todo) => {
                let id = todo.id;
                self.update(id)
            }
        }
    }

    fn create(&mut self) -> SubmitOutcome {
        if self.state.form.title.is_empty() {
            return SubmitOutcome::TitleRequired;
        }
        let input = CreateTodo {
            title: self.state.form.title.clone(),
            description: self.state.form.description.clone(),
            completed: self.state.form.completed,
        };
        let req = match self.client.build_create_todo(&input) {
            Ok(req) => req,
            Err(err) => {
                error!("failed to encode create payload: {err}");
                return SubmitOutcome::Failed;
            }
        };
        match self.call(req, |client, resp| client.parse_create_todo(resp)) {
            Ok(_) => {
                self.refresh();
                self.state.form.reset();
                SubmitOutcome::Created
            }
            Err(err) => {
                error!("failed to create todo: {err}");
                SubmitOutcome::Failed
            }
        }
    }

    fn update(&mut self, id: Uuid) -> SubmitOutcome {
        let input = UpdateTodo {
            title: self.state.form.title.clone(),
            description: self.state.form.description.clone(),
            completed: self.state.form.completed,
        };
        let req = match self.client.build_update_todo(id, &input) {
            Ok(req) => req,
            Err(err) => {
                error!("failed to encode update payload: {err}");
                return SubmitOutcome::Failed;
            }
        };
        match self.call(req, |client, resp| client.parse_update_todo(resp)) {
            Ok(_) => {
                self.refresh();
                self.state.mode = Mode::Idle;
                self.state.form.reset();
                SubmitOutcome::Updated
            }
            Err(err) => {
                error!("failed to update todo {id}: {err}");
                SubmitOutcome::Failed
            }
        }
    }

    /// Flip `completed` on a record directly from the list view, bypassing
    /// the form. Performs the same full-replace update with only that field
    /// changed.
    pub fn toggle_completed(&mut self, id: Uuid) {
        if self.state.busy {
            return;
        }
        let Some(todo) = self.state.todos.iter().find(|t| t.id == id) else {
            warn!("todo {id} is not in the current snapshot");
            return;
        };
        let mut input = UpdateTodo::from_record(todo);
        input.completed = !input.completed;
        let req = match self.client.build_update_todo(id, &input) {
            Ok(req) => req,
            Err(err) => {
                error!("failed to encode update payload: {err}");
                return;
            }
        };
        match self.call(req, |client, resp| client.parse_update_todo(resp)) {
            Ok(_) => self.refresh(),
            Err(err) => error!("failed to toggle todo {id}: {err}"),
        }
    }

    /// Delete one record. On failure the snapshot stays stale until the
    /// next sync.
    pub fn delete_todo(&mut self, id: Uuid) {
        if self.state.busy {
            return;
        }
        let req = self.client.build_delete_todo(id);
        match self.call(req, |client, resp| client.parse_delete_todo(resp)) {
            Ok(()) => self.refresh(),
            Err(err) => error!("failed to delete todo {id}: {err}"),
        }
    }

    /// Delete the whole collection. `confirm` is the blocking user prompt;
    /// if it returns false no request is made.
    pub fn delete_all_todos(&mut self, confirm: impl FnOnce() -> bool) {
        if self.state.busy {
            return;
        }
        if !confirm() {
            return;
        }
        let req = self.client.build_delete_all_todos();
        match self.call(req, |client, resp| client.parse_delete_all_todos(resp)) {
            Ok(()) => self.refresh(),
            Err(err) => error!("failed to delete all todos: {err}"),
        }
    }

    // --- edit-mode transitions ---

    /// `Idle -> Editing(r)`: pre-populate the form from the record. A
    /// record not in the current snapshot is ignored.
    pub fn start_editing(&mut self, id: Uuid) {
        let Some(todo) = self.state.todos.iter().find(|t| t.id == id).cloned() else {
            warn!("todo {id} is not in the current snapshot");
            return;
        };
        self.state.form.populate_from(&todo);
        self.state.mode = Mode::Editing(todo);
    }

    /// `Editing(r) -> Idle` without any remote call.
    pub fn cancel_editing(&mut self) {
        self.state.mode = Mode::Idle;
        self.state.form.reset();
    }

    /// One remote round-trip with the busy flag held across it. The flag
    /// clears on failure too; only the snapshot replacement is conditional
    /// on success.
    fn call<R>(
        &mut self,
        req: HttpRequest,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, RemoteError> {
        self.state.busy = true;
        let result = self
            .transport
            .execute(&req)
            .map_err(RemoteError::Transport)
            .and_then(|resp| parse(&self.client, resp).map_err(RemoteError::Api));
        self.state.busy = false;
        result
    }
}
