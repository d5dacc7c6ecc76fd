//! Full component lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the component over
//! real HTTP through `UreqTransport`. Validates that the component, the
//! core's request building/parsing, and the server's contract line up end
//! to end.

use todo_app::{render, Mode, SubmitOutcome, TodoApp, UreqTransport};

#[test]
fn component_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let mut app = TodoApp::new(&format!("http://{addr}"), UreqTransport::new());

    // Step 2: initial sync — empty collection.
    app.refresh();
    assert!(app.state().todos.is_empty(), "expected empty list");

    // Step 3: empty title is refused before touching the network.
    assert_eq!(app.submit(), SubmitOutcome::TitleRequired);

    // Step 4: create.
    app.set_title("Buy milk".to_string());
    assert_eq!(app.submit(), SubmitOutcome::Created);
    assert_eq!(app.state().todos.len(), 1);
    let created = app.state().todos[0].clone();
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description, "");
    assert!(!created.completed);
    assert_eq!(app.state().form.title, "", "form cleared after create");

    // Step 5: edit and flip completed.
    app.start_editing(created.id);
    assert!(app.state().mode.is_editing());
    assert_eq!(app.state().form.title, "Buy milk");
    app.set_completed(true);
    assert_eq!(app.submit(), SubmitOutcome::Updated);
    assert_eq!(app.state().mode, Mode::Idle);
    let updated = &app.state().todos[0];
    assert!(updated.completed);
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    // Step 6: toggle back from the list view.
    app.toggle_completed(created.id);
    assert!(!app.state().todos[0].completed);
    assert_eq!(app.state().todos[0].title, "Buy milk");

    // Step 7: the rendered view reflects the snapshot.
    let view = render(app.state());
    assert!(view.contains("* Buy milk"));
    assert!(view.contains("[Add Todo]"));

    // Step 8: delete one.
    app.delete_todo(created.id);
    assert!(app.state().todos.is_empty());

    // Step 9: create two, then delete all — declined first, then confirmed.
    for title in ["One", "Two"] {
        app.set_title(title.to_string());
        assert_eq!(app.submit(), SubmitOutcome::Created);
    }
    assert_eq!(app.state().todos.len(), 2);

    app.delete_all_todos(|| false);
    assert_eq!(app.state().todos.len(), 2, "declined prompt is a no-op");

    app.delete_all_todos(|| true);
    assert!(app.state().todos.is_empty(), "expected empty list after delete all");
}
