use service_core::observability::init_tracing;
use troubleshooting_service::config::TroubleshootingConfig;
use troubleshooting_service::services::init_metrics;
use troubleshooting_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TroubleshootingConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    // Must be installed before the first request records anything.
    init_metrics()?;

    let application = Application::build(config).await?;
    if !application.document().is_loaded() {
        tracing::warn!(
            path = %application.document().source().display(),
            "Serving placeholder content until the troubleshooting document is available"
        );
    }

    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
