//! Account API DTOs
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::account::Account;

pub const HELLO_MESSAGE: &str = "Hello, World!";

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello, World!")]
    pub message: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = 42)]
    pub id: i64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self { id: account.id }
    }
}
