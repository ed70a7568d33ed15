//! Process entry points shared by the two binaries.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::core::config::{Service, ServerConfig};
use crate::core::lifecycle::{CleanupStack, Lifecycle};
use crate::core::logging::init_tracing;
use crate::core::signal::shutdown_signal;
use crate::routes::{account_router, customer_router};

/// Load configuration, install logging and run `service` to completion.
pub async fn launch(service: Service) -> ExitCode {
    let config = match ServerConfig::from_env(service) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_guard = match init_tracing(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting {} on {}", service.name(), config.bind_addr);

    let result = match service {
        Service::Account => serve_accounts(&config).await,
        Service::Customer => serve_customers(&config).await,
    };

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {:#}", e);
            ExitCode::FAILURE
        }
    };

    // flush buffered log lines before exiting
    drop(log_guard);
    code
}

/// Account service: serves until Ctrl+C / SIGTERM, then drains and cleans up.
pub async fn serve_accounts(config: &ServerConfig) -> Result<()> {
    let router = account_router(config.service.name());
    let listener = bind(config).await?;

    let mut cleanup = CleanupStack::new();
    // Placeholders for handles a real deployment would open at startup.
    cleanup.push("database", || debug!("no database handle to close"));
    cleanup.push("cache", || debug!("no cache connection to close"));

    Lifecycle::new(cleanup)
        .serve_with_shutdown(listener, &router, shutdown_signal())
        .await
}

/// Customer service: serves until the process is killed.
pub async fn serve_customers(config: &ServerConfig) -> Result<()> {
    let router = customer_router(config.service.name());
    let listener = bind(config).await?;

    Lifecycle::new(CleanupStack::new())
        .serve_until_killed(listener, &router)
        .await
}

async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))
}
