//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering, the compiled client assets, and
//! a health probe under a single Axum router. The views themselves live in
//! `vitals-client`; nothing here renders markup directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vitals_client::app::{App, shell};

use crate::error::ServerError;

/// Full application router: health probe + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(app_with_options(conf.leptos_options))
}

/// Router for already-resolved Leptos options.
///
/// Unmatched paths fall through to a site-root file lookup and then to the
/// app shell, which renders the router's not-found view with a 404 status.
fn app_with_options(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on Leptos options.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
