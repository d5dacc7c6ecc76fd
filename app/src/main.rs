//! Line-oriented terminal front end for the TodoApp component.

use std::io::{self, Write};

use todo_app::{render, SubmitOutcome, TodoApp, UreqTransport};
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn main() {
    env_logger::init();
    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut app = TodoApp::new(&base_url, UreqTransport::new());
    app.refresh();

    print!("{}", render(app.state()));
    print_help();

    loop {
        let Some(line) = read_line("> ") else {
            break;
        };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => continue,
            "title" => app.set_title(rest.to_string()),
            "desc" => app.set_description(rest.to_string()),
            "done" => {
                let flipped = !app.state().form.completed;
                app.set_completed(flipped);
            }
            "submit" => match app.submit() {
                SubmitOutcome::TitleRequired => println!("Title is required!"),
                SubmitOutcome::Busy => println!("still working, try again"),
                SubmitOutcome::Created | SubmitOutcome::Updated | SubmitOutcome::Failed => {}
            },
            "edit" => match rest.parse::<Uuid>() {
                Ok(id) => app.start_editing(id),
                Err(_) => println!("not a valid id: {rest}"),
            },
            "cancel" => app.cancel_editing(),
            "toggle" => match rest.parse::<Uuid>() {
                Ok(id) => app.toggle_completed(id),
                Err(_) => println!("not a valid id: {rest}"),
            },
            "delete" => match rest.parse::<Uuid>() {
                Ok(id) => app.delete_todo(id),
                Err(_) => println!("not a valid id: {rest}"),
            },
            "clear" => app.delete_all_todos(confirm_delete_all),
            "list" => app.refresh(),
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other} (try 'help')");
                continue;
            }
        }
        print!("{}", render(app.state()));
    }
}

/// Blocking confirmation prompt for the bulk delete.
fn confirm_delete_all() -> bool {
    match read_line("Are you sure you want to delete all todos? [y/N] ") {
        Some(answer) => matches!(answer.trim(), "y" | "Y" | "yes"),
        None => false,
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            eprintln!("failed to read input: {err}");
            None
        }
    }
}

fn print_help() {
    println!(
        "commands: title <text> | desc <text> | done | submit | edit <id> | cancel\n          toggle <id> | delete <id> | clear | list | help | quit"
    );
}
