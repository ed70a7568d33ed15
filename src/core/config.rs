use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

pub const LOG_DIR_ENV: &str = "SWAGGER_RECIPES_LOG_DIR";

/// The two deployable services built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Greeting + account lookup, graceful shutdown on signal.
    Account,
    /// Health check + customer CRUD stubs, runs until killed.
    Customer,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Account => "account-server",
            Service::Customer => "customer-server",
        }
    }

    pub fn addr_env(&self) -> &'static str {
        match self {
            Service::Account => "ACCOUNT_SERVER_ADDR",
            Service::Customer => "CUSTOMER_SERVER_ADDR",
        }
    }

    pub fn default_addr(&self) -> SocketAddr {
        match self {
            Service::Account => SocketAddr::from(([0, 0, 0, 0], 3000)),
            Service::Customer => SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: Service,
    pub bind_addr: SocketAddr,
    /// When set, logs go to a daily rolling file in this directory instead of stdout.
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load `.env` (if any), then read the process environment.
    pub fn from_env(service: Service) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(service: Service, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(service.addr_env()) {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse().with_context(|| {
                format!("{} is not a valid socket address: {:?}", service.addr_env(), raw)
            })?,
            _ => service.default_addr(),
        };

        let log_dir = lookup(LOG_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            service,
            bind_addr,
            log_dir,
        })
    }
}
