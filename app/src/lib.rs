//! The TodoApp client component.
//!
//! # Overview
//! Holds the UI state for a todo-list client (collection snapshot, form
//! fields, editing pointer, busy flag) and drives the remote service through
//! `todo_core`'s build/parse client. Every mutation is a blocking remote
//! call followed by a full re-fetch of the collection; the snapshot is
//! replaced wholesale, never merged.
//!
//! # Design
//! - `TodoApp` is generic over a `Transport` so tests can drive the
//!   component with an in-memory fake; production uses `UreqTransport`.
//! - Remote failures are logged and swallowed: the previous state stays in
//!   place and the view never renders an error. The one synchronous user
//!   notice is the empty-title rejection, surfaced as `SubmitOutcome`.
//! - `render` is a pure function of state, kept free of I/O so it can be
//!   asserted on directly.

pub mod app;
pub mod state;
pub mod transport;
pub mod view;

pub use app::{SubmitOutcome, TodoApp};
pub use state::{AppState, FormState, Mode};
pub use transport::{Transport, TransportError, UreqTransport};
pub use view::render;
