//! Domain layer: request-scoped entities and their parsing rules

pub mod account;
