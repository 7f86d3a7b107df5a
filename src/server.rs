use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::RelayError;
use crate::relay::{MethodSpec, BLOCK_BY_NUMBER, BLOCK_NUMBER};
use crate::rpc::{Envelope, RpcRequest, RpcResponse};
use crate::upstream::NodeClient;

/// Shared state for the relay handlers.
pub struct RelayState {
    pub config: Config,
    pub node_client: NodeClient,
}

/// Health check response for load balancers.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Build the HTTP router for the relay surface.
pub fn build_router(state: Arc<RelayState>) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        .route("/block/number", post(block_number_handler))
        .route("/block/by-number", post(block_by_number_handler))
        // Simple health endpoint for load balancers; makes no upstream call
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// POST /block/number
async fn block_number_handler(State(state): State<Arc<RelayState>>, body: Bytes) -> Response {
    relay_handler(&state, &BLOCK_NUMBER, &body).await
}

/// POST /block/by-number
async fn block_by_number_handler(State(state): State<Arc<RelayState>>, body: Bytes) -> Response {
    relay_handler(&state, &BLOCK_BY_NUMBER, &body).await
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Shared relay path for every route: decode, validate, forward, echo.
async fn relay_handler(state: &RelayState, spec: &MethodSpec, body: &[u8]) -> Response {
    match relay_call(state, spec, body).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Run one validated single-shot exchange against the upstream node.
///
/// Validation failures return before any network traffic; a validated
/// envelope results in exactly one upstream call.
async fn relay_call(
    state: &RelayState,
    spec: &MethodSpec,
    body: &[u8],
) -> Result<RpcResponse, RelayError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| {
        debug!("rejected {}: body did not decode: {}", spec.method, e);
        RelayError::MalformedRequest
    })?;

    spec.validate(&envelope)?;

    let request = spec.outbound_request(envelope);
    state.node_client.call(&request).await
}

/// Start the HTTP server.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));

    info!("Starting relay on {}", addr);
    info!("Upstream node: {}", config.upstream_rpc_url);

    let node_client = NodeClient::new(&config.upstream_rpc_url);

    // One-shot upstream probe at boot; failure is non-fatal.
    let probe = RpcRequest::new(BLOCK_NUMBER.upstream_method, None, BLOCK_NUMBER.expected_id);
    match node_client.call(&probe).await {
        Ok(response) if response.error.is_null() => {
            info!("Upstream head: {}", response.result);
        }
        Ok(response) => {
            warn!(
                "Upstream reported an error on the startup probe: {}",
                response.error
            );
        }
        Err(e) => {
            warn!("Could not reach upstream node (will retry on requests): {}", e);
        }
    }

    let state = Arc::new(RelayState {
        config,
        node_client,
    });

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow!("Failed to bind server to {}: {}", addr, e))?;

    info!("Relay listening on http://{}", addr);

    axum::serve(listener, router).await?;

    info!("Relay stopped");
    Ok(())
}
