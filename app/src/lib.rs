//! Votingdapp: off-chain side of the `voting` program.
//!
//! Provides:
//! - Solana Actions endpoints that hand out unsigned vote transactions
//! - A data-access client for creating polls and candidates and voting
//! - Instruction builders shared by both

pub mod api;
pub mod blockhash;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod transaction;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::trace::TraceLayer;

use self::blockhash::RpcBlockhashSource;
use self::config::ActionsConfig;
use self::state::{AppState, AppStateInner};

pub use self::client::VotingClient;

/// Initialize tracing for the binary. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "votingdapp=info,tower_http=info".into()),
        )
        .init();
}

/// Create the shared `AppState` backed by the configured RPC endpoint.
pub fn create_app_state(config: ActionsConfig) -> anyhow::Result<AppState> {
    config.validate()?;
    let program_id = config.program_id()?;
    let blockhash = Arc::new(RpcBlockhashSource::new(
        config.rpc_url.clone(),
        config.commitment_config()?,
    ));
    Ok(Arc::new(AppStateInner::new(config, program_id, blockhash)))
}

/// Build the full router for a given state.
pub fn app_router(state: AppState) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(&state.config.allowed_origin)
        .context("allowed_origin is not a valid header value")?;

    Ok(Router::new()
        .merge(api::api_router(origin))
        .route("/api/health", axum::routing::get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind the action server and serve it in a background task.
///
/// Returns the actual address the server is listening on.
pub async fn start_server(config: ActionsConfig) -> anyhow::Result<SocketAddr> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid listen address")?;

    tracing::info!(
        rpc_url = %config.rpc_url,
        poll_id = config.poll_id,
        "Starting action server on {}",
        addr
    );

    let state = create_app_state(config)?;
    let app = app_router(state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Action server listening on {}", local_addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(local_addr)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "server": "votingdapp",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
