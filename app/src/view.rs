//! Pure view renderer: state in, markup out.
//!
//! Mirrors the layout of the web client it replaces: heading, form echo,
//! mode-dependent submit affordance, bulk-delete affordance, then one entry
//! per record. No I/O and no state mutation, so tests assert on the output
//! directly.

use std::fmt::Write;

use crate::state::{AppState, Mode};

pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    out.push_str("Todo List\n=========\n");
    if state.busy {
        out.push_str("Loading...\n");
    }

    let _ = writeln!(out, "Title:       {}", state.form.title);
    let _ = writeln!(out, "Description: {}", state.form.description);
    let _ = writeln!(
        out,
        "Completed:   [{}]",
        if state.form.completed { "x" } else { " " }
    );
    match &state.mode {
        Mode::Idle => out.push_str("[Add Todo]\n"),
        Mode::Editing(todo) => {
            let _ = writeln!(out, "[Update Todo] [Cancel]  (editing {})", todo.id);
        }
    }
    out.push_str("[Delete All Todos]\n\n");

    if state.todos.is_empty() {
        out.push_str("(no todos)\n");
        return out;
    }
    for todo in &state.todos {
        let _ = writeln!(out, "* {}", todo.title);
        if !todo.description.is_empty() {
            let _ = writeln!(out, "  {}", todo.description);
        }
        let _ = writeln!(
            out,
            "  Completed: {}  [Edit] [Delete]  ({})",
            if todo.completed { "Yes" } else { "No" },
            todo.id
        );
    }
    out
}
