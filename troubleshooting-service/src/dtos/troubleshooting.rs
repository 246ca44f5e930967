use crate::models::SectionDescriptor;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// RFC 3339 UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: String,
    pub document_loaded: bool,
}

/// Representation requested from `GET /api/troubleshooting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Markdown,
    Json,
}

impl DocumentFormat {
    /// Anything other than `json` means markdown.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Markdown,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentEnvelope {
    pub title: String,
    pub content: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingRequest {
    pub format: Option<String>,
    pub section: Option<String>,
    pub request_id: Option<String>,
}

impl TroubleshootingRequest {
    pub fn wants_html(&self) -> bool {
        self.format.as_deref() == Some("html")
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingResponse {
    pub request_id: String,
    pub timestamp: String,
    pub title: String,
    pub section: String,
    pub format: String,
    pub content: String,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// Length of `content` in characters.
    pub content_length: usize,
    /// When the guide was loaded into memory.
    pub last_updated: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<&SectionDescriptor> for SectionSummary {
    fn from(descriptor: &SectionDescriptor) -> Self {
        Self {
            id: descriptor.id.to_string(),
            title: descriptor.title.to_string(),
            description: descriptor.description.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionsResponse {
    pub sections: Vec<SectionSummary>,
    pub timestamp: String,
}
