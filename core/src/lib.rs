//! Synchronous client core for the todo API.
//!
//! # Overview
//! Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
//! touching the network. The caller runs the HTTP round-trip with whatever
//! transport it has, so the core stays deterministic and testable.
//!
//! # Design
//! Each operation is a `build_*` / `parse_*` pair on [`TodoClient`]:
//! welcome, list, create, replace (plus toggle, a replace with `completed`
//! flipped) and delete.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Message, Todo};
