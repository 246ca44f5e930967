use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct TroubleshootingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub document: DocumentSettings,
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSettings {
    /// Markdown file to serve, relative to the working directory.
    #[serde(default = "default_document_path")]
    pub path: PathBuf,
    #[serde(default = "default_document_title")]
    pub title: String,
}

fn default_service_name() -> String {
    "troubleshooting-service".to_string()
}

fn default_document_path() -> PathBuf {
    PathBuf::from("TROUBLESHOOTING.md")
}

fn default_document_title() -> String {
    "Troubleshooting Guide".to_string()
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            path: default_document_path(),
            title: default_document_title(),
        }
    }
}

impl Default for TroubleshootingConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            document: DocumentSettings::default(),
            service_name: default_service_name(),
        }
    }
}

impl TroubleshootingConfig {
    /// Reads `.env`, `configuration.*` and `APP_*` variables
    /// (e.g. `APP_DOCUMENT__PATH`), then `PORT`.
    pub fn load() -> Result<Self, AppError> {
        core_config::load_layered()
    }
}
