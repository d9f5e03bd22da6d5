use thiserror::Error;

use crate::interfaces::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not supported version: {0}")]
    UnsupportedVersion(String),
    #[error("available api: {}", available.join(", "))]
    UnknownOperation {
        version: String,
        available: Vec<String>,
    },
    #[error("credentials not found")]
    MissingCredentials,
    #[error("api `{name}` resolved to {found}, expected {expected}")]
    HandlerMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
