//! Client-local UI state.
//!
//! The collection is a server snapshot: it only ever changes by being
//! replaced with a freshly fetched list. Form state is ephemeral and client
//! owned; it is reset after a successful create/update and on cancel.

use todo_core::Todo;
use uuid::Uuid;

/// The fields of a todo being composed or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl FormState {
    /// Back to empty defaults, as after a successful submission or cancel.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    /// Pre-populate from a record when entering edit mode.
    pub fn populate_from(&mut self, todo: &Todo) {
        self.title = todo.title.clone();
        self.description = todo.description.clone();
        self.completed = todo.completed;
    }
}

/// The edit-mode state machine: composing a new todo, or editing an
/// existing record. There is no concurrent multi-edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Editing(Todo),
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing(_))
    }

    /// Identifier of the record being edited, if any.
    pub fn editing_id(&self) -> Option<Uuid> {
        match self {
            Mode::Idle => None,
            Mode::Editing(todo) => Some(todo.id),
        }
    }
}

/// Everything the view renders from.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Snapshot of the server's collection, replaced wholesale on sync.
    pub todos: Vec<Todo>,
    pub form: FormState,
    pub mode: Mode,
    /// Set for the duration of every remote call; mutating operations are
    /// refused while it is up.
    pub busy: bool,
}
