//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR page, its `/pkg` bundle, the `projects.json` document
//! and static site assets under a single Axum router. The gallery itself is
//! fetched and filtered in the browser; nothing here interprets project data.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portfolio_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Path the client fetches the project collection from.
pub const PROJECTS_ROUTE: &str = "/projects.json";

/// Full site router: SSR page, bundle, project data, static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` section or `LEPTOS_*` environment).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    Ok(data_routes(config, &site_root)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health check plus the project document, independent of Leptos options.
pub fn data_routes(config: &ServerConfig, site_root: &Path) -> Router {
    let projects = projects_file(config, site_root);
    tracing::info!(projects = %projects.display(), site_root = %site_root.display(), "serving site");

    Router::new()
        .route("/healthz", get(healthz))
        .route_service(PROJECTS_ROUTE, ServeFile::new(projects))
}

/// File served at [`PROJECTS_ROUTE`]: the configured override, else the
/// copy shipped in the site root.
#[must_use]
pub fn projects_file(config: &ServerConfig, site_root: &Path) -> PathBuf {
    config
        .projects_path
        .clone()
        .unwrap_or_else(|| site_root.join(PROJECTS_ROUTE.trim_start_matches('/')))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
