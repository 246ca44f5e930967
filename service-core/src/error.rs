use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Wire shape of every error the HTTP layer returns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad request",
            AppError::NotFound(_) => "Not found",
            AppError::InternalError(_) => "Internal server error",
            AppError::ConfigError(_) => "Configuration error",
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest(err)
            | AppError::NotFound(err)
            | AppError::InternalError(err)
            | AppError::ConfigError(err) => err.to_string(),
        }
    }

    /// Attach a correlation id so it is echoed in the error body.
    pub fn with_request_id(self, request_id: impl Into<String>) -> RequestError {
        RequestError {
            request_id: request_id.into(),
            error: self,
        }
    }

    fn render(self, request_id: Option<String>) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, request_id = ?request_id, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.label().to_string(),
                message: self.message(),
                request_id,
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render(None)
    }
}

/// An [`AppError`] raised while serving a request that carries its own id.
#[derive(Debug, Error)]
#[error("{error} (request {request_id})")]
pub struct RequestError {
    pub request_id: String,
    #[source]
    pub error: AppError,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        self.error.render(Some(self.request_id))
    }
}

/// Turns a panic caught by `CatchPanicLayer` into the standard 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::InternalError(anyhow::anyhow!(detail)).into_response()
}
