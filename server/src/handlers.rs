//! Route handlers.
//!
//! # Design
//! Each handler takes the shared [`Db`] and holds the lock for the whole
//! operation: a read lock for listing, the write lock for anything that
//! scans and mutates. Only replace can fail (no matching id); delete
//! answers the same acknowledgment whether or not anything matched.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::{
    error::ApiError,
    extract::{PathParam, Payload},
    model::{Message, Todo},
    Db,
};

pub const WELCOME: &str = "Welcome to ToDo API";
pub const DELETED: &str = "Deleted successfully";

pub async fn welcome() -> Json<Message> {
    Json(Message::new(WELCOME))
}

pub async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    debug!(count = store.len(), "listing todos");
    Json(store.list().to_vec())
}

pub async fn create_todo(State(db): State<Db>, Payload(todo): Payload<Todo>) -> Json<Todo> {
    let mut store = db.write().await;
    info!(id = todo.id, "creating todo");
    Json(store.create(todo).clone())
}

pub async fn replace_todo(
    State(db): State<Db>,
    PathParam(todo_id): PathParam<i64>,
    Payload(todo): Payload<Todo>,
) -> Result<Json<Todo>, ApiError> {
    let mut store = db.write().await;
    match store.replace(todo_id, todo) {
        Some(stored) => {
            info!(todo_id, id = stored.id, "replaced todo");
            Ok(Json(stored.clone()))
        }
        None => {
            debug!(todo_id, "no todo to replace");
            Err(ApiError::NotFound)
        }
    }
}

pub async fn delete_todo(State(db): State<Db>, PathParam(todo_id): PathParam<i64>) -> Json<Message> {
    let removed = db.write().await.delete(todo_id);
    info!(todo_id, removed, "deleted todos");
    Json(Message::new(DELETED))
}
