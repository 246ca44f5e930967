use axum::http::{HeaderValue, header};
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use serde_json::Value;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Largest server-error body that is rewritten to carry the request id.
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Correlation id of the current request, available to handlers as an
/// `Extension<RequestId>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Reuses the caller's `x-request-id` or mints a UUID v4, exposes it to
/// handlers and echoes it on the response. Server-error JSON bodies that do
/// not already name the request get a `requestId` field.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        req.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if response.status().is_server_error() {
        response = attach_request_id(response, &request_id).await;
    }

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

async fn attach_request_id(response: Response, request_id: &str) -> Response {
    let (mut parts, body) = response.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, request_id, "Could not buffer error response body");
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(mut fields)) if !fields.contains_key("requestId") => {
            fields.insert("requestId".to_string(), Value::from(request_id));
            match serde_json::to_vec(&fields) {
                Ok(rewritten) => {
                    parts.headers.remove(header::CONTENT_LENGTH);
                    Body::from(rewritten)
                }
                Err(_) => Body::from(bytes),
            }
        }
        _ => Body::from(bytes),
    };

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::{Extension, Router, http::StatusCode, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    async fn failing() -> AppError {
        AppError::InternalError(anyhow::anyhow!("boom"))
    }

    async fn failing_plain() -> (StatusCode, &'static str) {
        (StatusCode::BAD_GATEWAY, "upstream down")
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(id): Extension<RequestId>| async move { id.0 }),
            )
            .route("/fail", get(failing))
            .route("/fail-plain", get(failing_plain))
            .layer(from_fn(request_id_middleware))
    }

    async fn get_with_id(uri: &str, id: &str) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(REQUEST_ID_HEADER, id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn server_error_body_gets_request_id() {
        let response = get_with_id("/fail", "err-7").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["requestId"], "err-7");
    }

    #[tokio::test]
    async fn non_json_server_error_is_untouched() {
        let response = get_with_id("/fail-plain", "err-8").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"upstream down");
    }

    #[tokio::test]
    async fn keeps_incoming_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"abc-123");
    }

    #[tokio::test]
    async fn generates_id_when_missing() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}
