//! REST API helpers for the FastCode server.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`]; callers pick a fallback instead of
//! aborting page setup.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::error::ApiError;

pub const UUID_ENDPOINT: &str = "/api/uuid";
pub const VERSION_ENDPOINT: &str = "/api/version";

/// Identifier used when the server cannot supply one.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Default, Deserialize)]
struct UuidResponse {
    #[serde(default)]
    uuid: Option<String>,
}

/// Build info reported by `/api/version`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit: String,
}

impl VersionInfo {
    /// Footer label such as `v1.2.0 (abc1234)`; empty parts are dropped.
    pub fn label(&self) -> String {
        let commit: String = self.commit.chars().take(7).collect();
        match (self.version.is_empty(), commit.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.version.clone(),
            (true, false) => commit,
            (false, false) => format!("{} ({commit})", self.version),
        }
    }
}

/// Extract the identifier from a `/api/uuid` body. Missing or empty values
/// map to [`UNKNOWN_IDENTIFIER`].
#[cfg(any(test, feature = "csr"))]
fn parse_uuid_body(body: &str) -> Result<String, ApiError> {
    let parsed: UuidResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parsed
        .uuid
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_owned()))
}

#[cfg(any(test, feature = "csr"))]
fn parse_version_body(body: &str) -> Result<VersionInfo, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Collapse a fetch outcome into an identifier, logging the failure.
pub fn identifier_or_unknown(result: Result<String, ApiError>) -> String {
    result.unwrap_or_else(|err| {
        log::error!("failed to fetch uuid: {err}");
        UNKNOWN_IDENTIFIER.to_owned()
    })
}

#[cfg(feature = "csr")]
async fn get_text(endpoint: &'static str) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status {
            endpoint,
            status: resp.status(),
        });
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the deployment identifier from `/api/uuid`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-OK status, or a body
/// that is not JSON.
pub async fn fetch_uuid() -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = get_text(UUID_ENDPOINT).await?;
        parse_uuid_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch build info from `/api/version`.
///
/// # Errors
///
/// Same conditions as [`fetch_uuid`].
pub async fn fetch_version() -> Result<VersionInfo, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = get_text(VERSION_ENDPOINT).await?;
        parse_version_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}
