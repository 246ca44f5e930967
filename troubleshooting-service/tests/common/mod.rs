#![allow(dead_code)]

use std::path::PathBuf;
use troubleshooting_service::config::TroubleshootingConfig;
use troubleshooting_service::models::Document;
use troubleshooting_service::startup::{build_router, AppState, Application};
use uuid::Uuid;

pub const TEST_REQUEST_ID: &str = "test-request-123";

/// The guide shipped with the crate.
pub fn bundled_document_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("TROUBLESHOOTING.md")
}

pub fn test_config(document_path: PathBuf) -> TroubleshootingConfig {
    let mut config = TroubleshootingConfig::default();
    config.common.port = 0; // Random port for testing
    config.document.path = document_path;
    config
}

/// Router over an in-memory document, for `oneshot` tests.
pub fn router_with(document: Document) -> axum::Router {
    build_router(AppState::new(
        test_config(bundled_document_path()),
        document,
    ))
}

pub fn bundled_router() -> axum::Router {
    let text = std::fs::read_to_string(bundled_document_path())
        .expect("Failed to read bundled troubleshooting document");
    router_with(Document::from_text(bundled_document_path(), text))
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub document_loaded: bool,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_document(bundled_document_path()).await
    }

    /// Starts a server whose configured guide does not exist.
    pub async fn spawn_without_document() -> Self {
        let missing = std::env::temp_dir().join(format!("missing-guide-{}.md", Uuid::new_v4()));
        Self::spawn_with_document(missing).await
    }

    pub async fn spawn_with_document(path: PathBuf) -> Self {
        let app = Application::build(test_config(path))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let document_loaded = app.document().is_loaded();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            document_loaded,
        }
    }
}
