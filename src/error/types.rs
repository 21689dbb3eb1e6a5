// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

/// Crate-wide error type.
///
/// Only transport/protocol-level failures live here. Logical no-match
/// outcomes are expressed as `Ok(None)` by the resolver services and never
/// become an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The HTTP request itself failed (connect, timeout, undecodable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success envelope.
    #[error("API error: code: {code} type: {kind} message: {message}")]
    Api {
        code: i64,
        kind: String,
        message: String,
    },

    /// The envelope claimed success but carried no payload.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The caller cancelled the resolution while awaiting the catalog.
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
