//! Process plumbing: configuration, logging, signals and the server lifecycle

pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod signal;
