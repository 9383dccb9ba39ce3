//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("controller not found: {0}")]
    NotFound(String),
    #[error("invalid controller {controller}: {message}")]
    Invalid { controller: String, message: String },
}

#[derive(Error, Debug)]
pub enum RouterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error("missing handler: resource '{resource}' has no handler for action '{action}'")]
    MissingHandler { resource: String, action: String },
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("unknown action: {resource}#{action}")]
    UnknownAction { resource: String, action: String },
    #[error("invalid template '{template}': {message}")]
    Template { template: String, message: String },
    #[error("no route for {method} {path}")]
    NoRoute { method: String, path: String },
    #[error("payload too large (limit {0} bytes)")]
    PayloadTooLarge(usize),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl RouterError {
    /// Status and machine-readable code used in the error envelope.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RouterError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            RouterError::Controller(_) => (StatusCode::INTERNAL_SERVER_ERROR, "controller_error"),
            RouterError::MissingHandler { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "missing_handler"),
            RouterError::UnknownResource(_) => (StatusCode::NOT_FOUND, "unknown_resource"),
            RouterError::UnknownAction { .. } => (StatusCode::NOT_FOUND, "unknown_action"),
            RouterError::Template { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "template_error"),
            RouterError::NoRoute { .. } => (StatusCode::NOT_FOUND, "not_found"),
            RouterError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            RouterError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl IntoResponse for RouterError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_client_statuses() {
        let cases = [
            (RouterError::BadRequest("stream reset".into()), StatusCode::BAD_REQUEST, "bad_request"),
            (RouterError::PayloadTooLarge(4), StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            (
                RouterError::NoRoute {
                    method: "GET".into(),
                    path: "/nope".into(),
                },
                StatusCode::NOT_FOUND,
                "not_found",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code));
            assert_eq!(err.into_response().status(), status);
        }
    }
}
