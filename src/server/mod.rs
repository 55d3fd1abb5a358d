//! HTTP server for the contact API.
//!
//! Assembles the axum router, the shared application state, and the
//! middleware stack (request metrics, tracing, CORS), and runs the listener.

pub mod extract;
pub mod handlers;

pub use extract::AuthUser;

use crate::auth::TokenIssuer;
use crate::metrics::Metrics;
use crate::services::{AuthService, ContactService};
use anyhow::Result;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub contacts: Arc<dyn ContactService>,
    pub tokens: TokenIssuer,
    pub metrics: Metrics,
}

/// Build the full application router.
///
/// The health check is the only route outside `/api`; everything under
/// `/api/contacts` and `/api/auth/me` requires a bearer token via the
/// [`AuthUser`] extractor.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/me", get(handlers::current_user))
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/api/contacts/tags", get(handlers::list_tags))
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route(
            "/api/contacts/{id}/favorite",
            patch(handlers::toggle_favorite),
        )
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Counts every response and its handling time. An error is any 4xx or 5xx.
async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    state.metrics.record_request(start.elapsed());
    if response.status().is_client_error() || response.status().is_server_error() {
        state.metrics.record_error();
    }
    response
}

/// Serve the API on `addr` until the server loop exits.
///
/// # Errors
/// Returns an error if the listener cannot bind or the accept loop fails.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
