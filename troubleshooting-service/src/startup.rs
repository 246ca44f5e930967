use crate::config::TroubleshootingConfig;
use crate::handlers;
use crate::models::Document;
use crate::services::load_document;
use axum::{
    http::{header, HeaderName, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::{panic_response, AppError};
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TroubleshootingConfig>,
    pub document: Arc<Document>,
}

impl AppState {
    pub fn new(config: TroubleshootingConfig, document: Document) -> Self {
        Self {
            config: Arc::new(config),
            document: Arc::new(document),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::not_found),
        )
        .route(
            "/ready",
            get(handlers::readiness_check).fallback(handlers::not_found),
        )
        .route(
            "/metrics",
            get(handlers::metrics).fallback(handlers::not_found),
        )
        .route(
            "/api/troubleshooting",
            get(handlers::get_troubleshooting)
                .post(handlers::post_troubleshooting)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/troubleshooting/sections",
            get(handlers::list_sections).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found);

    with_middleware(routes).with_state(state)
}

/// Wraps `routes` in the service's middleware stack. Layers only apply to
/// routes registered before this call.
pub fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static(REQUEST_ID_HEADER),
                ]),
        )
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Loads the guide, binds the listener and prepares the server. A missing
    /// guide is not an error; failing to bind is.
    pub async fn build(config: TroubleshootingConfig) -> Result<Self, AppError> {
        let document = load_document(&config.document.path).await;
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let state = AppState::new(config, document);

        let app = build_router(state.clone());

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
