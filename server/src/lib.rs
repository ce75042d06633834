//! HTTP service holding an in-memory list of todos.
//!
//! # Overview
//! `GET /` greets, `GET /todos` lists, `POST /todos` appends,
//! `PUT /todos/{todo_id}` replaces the first match and
//! `DELETE /todos/{todo_id}` removes every match. State lives only in the
//! process; each [`app`] call starts from an empty store.
//!
//! # Design
//! - The store is injected through axum state as [`Db`]; nothing is global.
//! - Bodies and path ids are parsed by the extractors in [`extract`], so
//!   every client error becomes an [`ApiError`] with a `detail` body.
//! - Requests are traced with `tower-http`; cross-origin access is limited
//!   to [`Config::allowed_origin`] with credentials.

pub mod coerce;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::ApiError;
pub use model::{Message, Todo};
pub use store::TodoStore;

/// Shared store handed to every handler. Reads and mutations are serialized
/// through the lock, so each operation sees a consistent list.
pub type Db = Arc<RwLock<TodoStore>>;

/// Router over a fresh, empty store.
pub fn app(config: &Config) -> Router {
    router(Db::default(), config)
}

pub fn router(db: Db, config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{todo_id}",
            put(handlers::replace_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors(config))
        .with_state(db)
}

// Credentialed requests cannot use `*`, so methods and headers are mirrored.
fn cors(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.allowed_origin.clone())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(&config)).await
}

/// Serves until `shutdown` resolves, then lets in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, config: Config, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(&config))
        .with_graceful_shutdown(shutdown)
        .await
}
