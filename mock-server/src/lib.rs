use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Full-replace payload: `id` and `createdAt` stay as they were on the
/// server, everything else is overwritten.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).delete(delete_all_todos),
        )
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        completed: input.completed,
        created_at: Utc::now(),
    };
    db.write().await.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.description = input.description;
    todo.completed = input.completed;
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_all_todos(State(db): State<Db>) -> StatusCode {
    db.write().await.clear();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Todo {
        Todo {
            id: Uuid::nil(),
            title: title.to_string(),
            description: String::new(),
            completed: false,
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn todo_serializes_to_json() {
        let json = serde_json::to_value(sample("Test")).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: "Roundtrip".to_string(),
            description: "notes".to_string(),
            completed: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, todo.id);
        assert_eq!(back.title, todo.title);
        assert_eq!(back.description, todo.description);
        assert_eq!(back.completed, todo.completed);
        assert_eq!(back.created_at, todo.created_at);
    }

    #[test]
    fn create_todo_defaults_description_and_completed() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"Bare"}"#).unwrap();
        assert_eq!(input.title, "Bare");
        assert_eq!(input.description, "");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_accepts_explicit_fields() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","description":"d","completed":true}"#).unwrap();
        assert_eq!(input.description, "d");
        assert!(input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_requires_title() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_defaults_omitted_optional_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"title":"New title"}"#).unwrap();
        assert_eq!(input.title, "New title");
        assert_eq!(input.description, "");
        assert!(!input.completed);
    }
}
