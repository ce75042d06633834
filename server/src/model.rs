//! Request and response bodies.
//!
//! # Design
//! `Todo` is both the input and the output shape. On input `id` and
//! `completed` go through [`crate::coerce`], so `"1"` or `1.0` is an id and
//! `"true"` or `1` is a flag; output always uses plain JSON types.

use serde::{Deserialize, Serialize};

use crate::coerce;

/// A single todo item.
///
/// Ids are supplied by the caller and are not required to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(deserialize_with = "coerce::integer")]
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "coerce::boolean")]
    pub completed: bool,
}

/// Plain acknowledgment body: `{"message": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
