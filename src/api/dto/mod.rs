//! Response and request schemas, one type per endpoint shape

pub mod account_dto;
pub mod customer_dto;
pub mod system_dto;
