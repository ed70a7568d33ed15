//! Account lookup. Accounts are never stored; one is built per request
//! from the `{id}` path segment and dropped with the response.

use std::num::ParseIntError;

use thiserror::Error;

/// Account identified by a signed 64-bit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid account id {raw:?}: {source}")]
pub struct AccountIdError {
    pub raw: String,
    #[source]
    pub source: ParseIntError,
}

/// Parse a decimal account id (optional leading sign, no whitespace).
pub fn parse_account(raw: &str) -> Result<Account, AccountIdError> {
    raw.parse::<i64>()
        .map(|id| Account { id })
        .map_err(|source| AccountIdError {
            raw: raw.to_string(),
            source,
        })
}
