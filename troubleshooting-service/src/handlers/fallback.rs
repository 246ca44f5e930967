use axum::http::{Method, Uri};
use service_core::error::AppError;

/// Unmatched paths and unsupported methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!(
        "Route {} {} not found",
        method,
        uri.path()
    ))
}
