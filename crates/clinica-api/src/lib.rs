//! REST client for the clinic backend.
//!
//! Wraps the backend's CRUD endpoints (`/pacientes`, `/citas`,
//! `/historiales`, `/doctores`) behind typed methods. Every call takes an
//! explicitly passed [`AccessToken`]; there is no ambient session state.
//! Token acquisition and renewal belong to the login flow and are not
//! handled here.
//!
//! List responses decode leniently via [`clinica_core::models::decode_records`]:
//! a malformed record is logged and skipped rather than failing the batch.

mod client;

pub use client::*;

use std::fmt;

use thiserror::Error;

/// Client errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Opaque bearer credential for the backend API.
///
/// Held by the caller and threaded through each request. The token value is
/// redacted from `Debug` output so it cannot leak into logs.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub(crate) fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::new("super-secret-jwt");
        let printed = format!("{:?}", token);
        assert!(!printed.contains("super-secret-jwt"));
        assert_eq!(printed, "AccessToken(***)");
    }
}
