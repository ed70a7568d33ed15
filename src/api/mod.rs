//! HTTP surface: routes, controllers, DTOs and the OpenAPI documents

pub mod controller;
pub mod docs;
pub mod dto;
pub mod routes;
pub mod util;
