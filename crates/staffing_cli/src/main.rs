//! Staffing HTTP server entry point.
//!
//! # Responsibility
//! - Parse CLI/env configuration and initialize logging.
//! - Wire store, repository, service and router, then serve until signalled.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use staffing_core::{
    default_log_level, init_logging, LoggingConfig, MemoryStaffRepository, ServiceConfig,
    StaffService, DEFAULT_MAX_PAGE_LIMIT,
};
use staffing_http::{AppState, HttpConfig};
use std::sync::Arc;

/// In-memory positions and employees CRUD server.
#[derive(Debug, Parser)]
#[command(name = "staffing-server")]
#[command(version)]
struct Cli {
    /// Interface to bind.
    #[arg(long, env = "STAFFING_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(short, long, env = "STAFFING_PORT", default_value_t = 8080)]
    port: u16,

    /// Largest accepted `limit` for list endpoints.
    #[arg(long, env = "STAFFING_MAX_PAGE_LIMIT", default_value_t = DEFAULT_MAX_PAGE_LIMIT)]
    max_page_limit: u32,

    /// Log level (trace|debug|info|warn|error); defaults by build mode.
    #[arg(long, env = "STAFFING_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, env = "STAFFING_LOG_DIR")]
    log_dir: Option<String>,
}

impl Cli {
    fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: self.log_dir.clone(),
        }
    }

    fn http_config(&self) -> HttpConfig {
        HttpConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_page_limit: self.max_page_limit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.logging_config()).map_err(|err| anyhow!(err))?;
    info!(
        "event=server_config module=cli status=ok max_page_limit={} core_version={}",
        cli.max_page_limit,
        staffing_core::core_version()
    );

    let service = StaffService::with_config(MemoryStaffRepository::new(), cli.service_config());
    let state = AppState::new(Arc::new(service));
    let http = cli.http_config();

    staffing_http::serve(&http, state)
        .await
        .with_context(|| format!("http server on {} failed", http.bind_addr()))
}
