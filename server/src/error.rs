//! HTTP-facing errors.
//!
//! # Design
//! Every failure a handler can produce is an [`ApiError`]. Rejections from
//! axum's own extractors are funnelled in through [`crate::extract`], so a
//! bad body and a bad path segment share one `{"detail": [...]}` shape.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

/// One entry of a 422 `detail` list.
#[derive(Debug, Serialize)]
pub struct Issue {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::InvalidPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn issue(&self) -> Option<Issue> {
        match self {
            ApiError::NotFound => None,
            ApiError::InvalidBody(rejection) => Some(Issue {
                loc: vec!["body"],
                msg: rejection.body_text(),
                kind: body_kind(rejection),
            }),
            ApiError::InvalidPath(rejection) => Some(Issue {
                loc: vec!["path", "todo_id"],
                msg: rejection.body_text(),
                kind: "int_parsing",
            }),
        }
    }
}

fn body_kind(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "model_type",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_unreadable",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.issue() {
            None => json!({ "detail": self.to_string() }),
            Some(issue) => {
                tracing::debug!(error = %self, "rejected request");
                json!({ "detail": [issue] })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn not_found_message_is_fixed() {
        assert_eq!(ApiError::NotFound.to_string(), "Todo not found");
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn not_found_renders_detail_string() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Todo not found"}));
    }
}
