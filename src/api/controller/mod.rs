//! Controllers: connect routes to domain logic and shape the responses

pub mod account;
pub mod customer;
pub mod docs;
pub mod system;
