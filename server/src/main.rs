mod config;
mod error;
mod routes;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if dotenv_error_is_reportable(&e) => tracing::warn!(error = %e, "failed to load .env"),
        Err(_) => {}
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "vitals server exited");
        return Err(e);
    }
    Ok(())
}

/// A missing `.env` is the normal case outside local development; anything
/// else (malformed lines, unreadable file) is worth a warning.
fn dotenv_error_is_reportable(err: &dotenvy::Error) -> bool {
    !err.not_found()
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "vitals listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
