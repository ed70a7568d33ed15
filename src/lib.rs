//! Two small REST services with generated OpenAPI documentation.
//!
//! - `account-server`: `/`, `/accounts/{id}`, `/swagger/*`; shuts down
//!   gracefully on Ctrl+C / SIGTERM.
//! - `customer-server`: `/healthcheck`, `/api/v1/customers[/{id}]`,
//!   `/swagger/*`; runs until killed.

pub mod api;
pub mod app_state;
pub mod core;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod server;
