//! Portfolio host: serves the server-rendered page, its WASM bundle and the
//! `projects.json` document the gallery loads after hydration.

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env present but unreadable");
        }
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
