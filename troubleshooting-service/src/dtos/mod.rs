pub mod troubleshooting;

pub use troubleshooting::{
    format_timestamp, now_timestamp, DocumentEnvelope, DocumentFormat, FormatQuery,
    HealthResponse, ReadinessResponse, ResponseMetadata, SectionSummary, SectionsResponse,
    TroubleshootingRequest, TroubleshootingResponse,
};
