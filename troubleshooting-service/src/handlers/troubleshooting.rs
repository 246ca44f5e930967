use crate::dtos::{
    format_timestamp, now_timestamp, DocumentEnvelope, DocumentFormat, FormatQuery,
    ResponseMetadata, SectionSummary, SectionsResponse, TroubleshootingRequest,
    TroubleshootingResponse,
};
use crate::models::SECTIONS;
use crate::services::{extract, to_html, COMPLETE_SECTION};
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use metrics::counter;
use service_core::error::{AppError, RequestError};
use service_core::middleware::tracing::RequestId;
use uuid::Uuid;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /api/troubleshooting?format=markdown|json`
pub async fn get_troubleshooting(
    State(state): State<AppState>,
    query: Option<Query<FormatQuery>>,
) -> Response {
    let format = DocumentFormat::parse(query.as_ref().and_then(|q| q.0.format.as_deref()));
    let content = state.document.content().to_string();

    match format {
        DocumentFormat::Markdown => {
            ([(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)], content).into_response()
        }
        DocumentFormat::Json => Json(DocumentEnvelope {
            title: state.config.document.title.clone(),
            content,
            timestamp: now_timestamp(),
            version: VERSION.to_string(),
        })
        .into_response(),
    }
}

/// `POST /api/troubleshooting` with `{format?, section?, requestId?}`.
///
/// An empty body is the same as `{}`.
pub async fn post_troubleshooting(
    State(state): State<AppState>,
    header_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> Result<Json<TroubleshootingResponse>, RequestError> {
    let fallback_id = header_id
        .map(|Extension(RequestId(id))| id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let request = parse_request(&body).map_err(|e| e.with_request_id(fallback_id.clone()))?;
    let wants_html = request.wants_html();
    let request_id = request
        .request_id
        .filter(|id| !id.is_empty())
        .unwrap_or(fallback_id);

    let extracted = extract(&state.document, request.section.as_deref());
    counter!("troubleshooting_section_requests_total", "outcome" => extracted.outcome())
        .increment(1);

    let content = if wants_html {
        to_html(extracted.content())
    } else {
        extracted.content().to_string()
    };
    let title = extracted
        .descriptor()
        .map(|d| d.title.to_string())
        .unwrap_or_else(|| state.config.document.title.clone());
    let section = request
        .section
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| COMPLETE_SECTION.to_string());
    let format = request.format.unwrap_or_else(|| "markdown".to_string());

    tracing::info!(
        request_id = %request_id,
        section = %section,
        format = %format,
        outcome = extracted.outcome(),
        "Served troubleshooting content"
    );

    Ok(Json(TroubleshootingResponse {
        request_id,
        timestamp: now_timestamp(),
        title,
        section,
        format,
        metadata: ResponseMetadata {
            content_length: content.chars().count(),
            last_updated: format_timestamp(state.document.loaded_at()),
            version: VERSION.to_string(),
        },
        content,
    }))
}

/// `GET /api/troubleshooting/sections`
pub async fn list_sections() -> Json<SectionsResponse> {
    Json(SectionsResponse {
        sections: SECTIONS.iter().map(SectionSummary::from).collect(),
        timestamp: now_timestamp(),
    })
}

fn parse_request(body: &[u8]) -> Result<TroubleshootingRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TroubleshootingRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid request body: {}", e)))
}
