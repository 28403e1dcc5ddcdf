//! Error types for the REST helpers in [`crate::net::api`].
//!
//! ERROR HANDLING
//! ==============
//! None of these surface to the user. Callers log them and substitute a
//! fallback (`unknown` identifier, hidden version badge).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    /// The body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}
