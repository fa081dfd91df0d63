use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// A malformed environment variable.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Reasons a request body is refused before the query is executed.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("body is not a valid GraphQL request: {0}")]
    Body(String),
    #[error("variables could not be read: {0}")]
    Variables(#[from] serde_json::Error),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let body = json!({
            "statusCode": status.as_u16(),
            "error": "Bad Request",
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
