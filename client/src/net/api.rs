//! HTTP loading of the project collection.
//!
//! Client-side (hydrate): a single `gloo-net` GET against the configured
//! resource location. Server-side (SSR): returns `LoadError::Unavailable`
//! since the gallery is populated only in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `LoadError` so the caller has one place to
//! report it. There is no retry and no partial result.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Project;

/// Reasons the project collection could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not a JSON array of projects.
    #[error("malformed project data: {0}")]
    Decode(String),

    /// Loading was attempted outside the browser.
    #[error("project loading is only available in the browser")]
    Unavailable,
}

/// Parse a `projects.json` body into the ordered project list.
///
/// # Errors
///
/// Returns `LoadError::Decode` if the body is not an array of project objects.
pub fn decode_projects(body: &str) -> Result<Vec<Project>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Fetch and decode the project collection from `url`.
///
/// # Errors
///
/// Returns a `LoadError` describing the network, status or decode failure.
pub async fn fetch_projects(url: &str) -> Result<Vec<Project>, LoadError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
        decode_projects(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(LoadError::Unavailable)
    }
}
