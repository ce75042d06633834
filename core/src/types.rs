//! Wire types for the todo API.
//!
//! # Design
//! Defined independently from the server crate so the client never depends
//! on axum. The end-to-end test in `tests/integration.rs` catches drift.

use serde::{Deserialize, Serialize};

/// A todo item. Doubles as the request body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }

    /// Same todo with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// `{"message": "..."}` returned by the welcome and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// `{"detail": ...}` returned on 404. The detail is a string there, but a
/// list of issues on 422, so it is kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}
