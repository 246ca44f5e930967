//! Startup loading of the troubleshooting guide.

use crate::models::Document;
use std::path::Path;

/// Served in place of the guide when the backing file cannot be read.
pub const DOCUMENT_UNAVAILABLE: &str = "Error loading troubleshooting guide. \
The documentation file could not be read; check the service configuration and logs.";

/// Reads the guide once. Never fails: an unreadable file yields a
/// [`Document`] in the fallback state so the service still starts.
pub async fn load_document(path: impl AsRef<Path>) -> Document {
    let path = path.as_ref();

    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let document = Document::from_text(path, content);
            tracing::info!(
                path = %path.display(),
                bytes = document.content().len(),
                sections = document.headings().count(),
                "Loaded troubleshooting document"
            );
            document
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load troubleshooting document, serving placeholder"
            );
            Document::fallback(path, DOCUMENT_UNAVAILABLE, e.to_string())
        }
    }
}
