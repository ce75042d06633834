//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Every operation is split into a
//! `build_*` method producing an [`HttpRequest`] and a `parse_*` method
//! consuming the matching [`HttpResponse`].

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, Message, Todo};

/// The server answers 200 on every successful operation.
const OK: u16 = 200;

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_welcome(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, format!("{}/", self.base_url))
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.todos_url())
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Post, self.todos_url(), todo)
    }

    /// Replaces the first todo with id `id` by `todo`. The server does not
    /// require `todo.id == id`.
    pub fn build_replace_todo(&self, id: i64, todo: &Todo) -> Result<HttpRequest, ApiError> {
        HttpRequest::json(HttpMethod::Put, self.todo_url(id), todo)
    }

    /// Flips `completed` on `todo`, addressed by its own id.
    pub fn build_toggle_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.build_replace_todo(todo.id, &todo.toggled())
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn parse_welcome(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_status(&response)?;
        response.decode()
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        response.decode()
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        response.decode()
    }

    pub fn parse_replace_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        response.decode()
    }

    /// Deleting an id that does not exist still succeeds.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_status(&response)?;
        response.decode()
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        OK => Ok(()),
        404 => Err(ApiError::NotFound {
            detail: not_found_detail(&response.body),
        }),
        422 => Err(ApiError::Validation {
            body: response.body.clone(),
        }),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

// A 404 from an unknown route has no JSON body; fall back to the raw text.
fn not_found_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://127.0.0.1:8000")
    }

    fn body_json(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_welcome_targets_root() {
        let req = client().build_welcome();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:8000/");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:8000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_sends_full_record() {
        let req = client().build_create_todo(&Todo::new(1, "Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://127.0.0.1:8000/todos");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(
            body_json(&req),
            serde_json::json!({"id": 1, "name": "Buy milk", "completed": false})
        );
    }

    #[test]
    fn build_replace_todo_uses_path_id() {
        let todo = Todo {
            id: 2,
            name: "Buy bread".to_string(),
            completed: true,
        };
        let req = client().build_replace_todo(1, &todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://127.0.0.1:8000/todos/1");
        assert_eq!(body_json(&req)["id"], 2);
    }

    #[test]
    fn build_toggle_todo_flips_completed() {
        let req = client().build_toggle_todo(&Todo::new(7, "Walk dog")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://127.0.0.1:8000/todos/7");
        assert_eq!(body_json(&req)["completed"], true);
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(-3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://127.0.0.1:8000/todos/-3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.build_list_todos().url, "http://127.0.0.1:8000/todos");
    }

    #[test]
    fn parse_welcome_success() {
        let response = HttpResponse::new(200, r#"{"message":"Welcome to ToDo API"}"#);
        let message = client().parse_welcome(response).unwrap();
        assert_eq!(message.message, "Welcome to ToDo API");
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(200, r#"[{"id":1,"name":"Test","completed":false}]"#);
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos, vec![Todo::new(1, "Test")]);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_todo_validation_error() {
        let response = HttpResponse::new(
            422,
            r#"{"detail":[{"loc":["body"],"msg":"missing field `name`","type":"model_type"}]}"#,
        );
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::Validation { ref body } if body.contains("name")));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_replace_todo_not_found_keeps_detail() {
        let response = HttpResponse::new(404, r#"{"detail":"Todo not found"}"#);
        let err = client().parse_replace_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref detail } if detail == "Todo not found"));
    }

    #[test]
    fn parse_not_found_without_json_body() {
        let response = HttpResponse::new(404, "");
        let err = client().parse_replace_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref detail } if detail.is_empty()));
    }

    #[test]
    fn parse_delete_todo_success() {
        let response = HttpResponse::new(200, r#"{"message":"Deleted successfully"}"#);
        let message = client().parse_delete_todo(response).unwrap();
        assert_eq!(message.message, "Deleted successfully");
    }
}
