//! HTTP transport adapter for the staffing service.
//!
//! # Responsibility
//! - Decode JSON bodies and path/query parameters into core requests.
//! - Attach a `RequestContext` to every request and log access lines.
//! - Translate `ServiceError` kinds into HTTP status codes.
//!
//! # Invariants
//! - Handlers hold no business rules; every decision is made in core.
//! - Every request and response carries an `x-correlation-id`.

pub mod error;
pub mod handlers;
pub mod middleware;

use axum::routing::{get, post};
use axum::Router;
use log::{error, info};
use staffing_core::{MemoryStaffRepository, StaffService};
use std::sync::Arc;

pub use error::{ApiError, ApiResult};
pub use middleware::CORRELATION_ID_HEADER;

/// Service type shared by all handlers.
pub type SharedService = Arc<StaffService<MemoryStaffRepository>>;

/// Router state.
#[derive(Clone)]
pub struct AppState {
    pub service: SharedService,
}

impl AppState {
    pub fn new(service: SharedService) -> Self {
        Self { service }
    }
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl HttpConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builds the full router with correlation-id and access-log layers.
pub fn create_router(state: AppState) -> Router {
    // Layers run outermost-last: the correlation id is attached before access logging.
    Router::new()
        .route("/health", get(handlers::health))
        .route("/positions", get(handlers::positions::list_positions))
        .route(
            "/position",
            post(handlers::positions::create_position).put(handlers::positions::update_position),
        )
        .route(
            "/position/{id}",
            get(handlers::positions::get_position).delete(handlers::positions::delete_position),
        )
        .route("/employees", get(handlers::employees::list_employees))
        .route(
            "/employee",
            post(handlers::employees::create_employee).put(handlers::employees::update_employee),
        )
        .route(
            "/employee/{id}",
            get(handlers::employees::get_employee).delete(handlers::employees::delete_employee),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(axum::middleware::from_fn(middleware::correlation_id))
        .with_state(state)
}

/// Serves the router until SIGINT/SIGTERM.
pub async fn serve(config: &HttpConfig, state: AppState) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("event=http_listen module=http status=ok addr={addr}");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=http_shutdown module=http status=ok");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("event=signal_install module=http status=error signal=SIGINT error={err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("event=signal_install module=http status=error signal=SIGTERM error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("event=shutdown_signal module=http signal=SIGINT");
        }
        _ = terminate => {
            info!("event=shutdown_signal module=http signal=SIGTERM");
        }
    }
}
