//! API route declarations

pub mod account_routes;
pub mod customer_routes;
pub mod docs_routes;
