// Keccak Miner - Free and Open Source Software Statement
//
// This project, keccak-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web_server.rs
// Version: 1.0.0
//
// This file implements the HTTP mining service. It accepts a challenge and a
// signer as base64 JSON fields, runs the nonce search off the async runtime
// and answers with the winning nonce as decimal text.
//
// Tree Location:
// - src/web_server.rs (mining service)
// - Depends on: axum, tower-http, serde_with, miner/cpu

use crate::core::{MinerError, SearchRequest};
use crate::miner::cpu::{CpuMiner, SearchConfig};
use crate::utils::format::FormatUtils;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const LOG_TARGET: &str = "keccak_miner::web_server";

/// Listener and policy settings for the mining service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    /// The single origin granted cross-origin access
    pub allowed_origin: String,
    pub search: SearchConfig,
}

/// Body of `POST /mine`. Binary fields travel as standard base64.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineRequest {
    #[serde_as(as = "Base64")]
    pub current_hash: Vec<u8>,
    #[serde_as(as = "Base64")]
    pub sign: Vec<u8>,
}

#[derive(Clone)]
struct AppState {
    search: Arc<SearchConfig>,
}

impl IntoResponse for MinerError {
    fn into_response(self) -> Response {
        let status = match &self {
            MinerError::InvalidLength { .. }
            | MinerError::InvalidPayload { .. }
            | MinerError::InvalidHex { .. } => StatusCode::BAD_REQUEST,
            MinerError::Exhausted => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(target: LOG_TARGET, "❌ Request failed: {}", self);
        } else {
            warn!(target: LOG_TARGET, "Rejected request: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// Build the service router with its CORS policy applied.
pub fn router(config: &ServiceConfig) -> Result<Router, MinerError> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .map_err(|_| MinerError::InvalidOrigin(config.allowed_origin.clone()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let state = AppState {
        search: Arc::new(config.search.clone()),
    };

    Ok(Router::new()
        .route("/mine", post(mine_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors))
}

/// Start the mining service and serve until Ctrl-C.
pub async fn start_web_server(config: ServiceConfig) -> Result<(), MinerError> {
    let app = router(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind).await.map_err(|e| {
        error!(target: LOG_TARGET, "❌ Failed to bind mining service to {}: {}", config.bind, e);
        e
    })?;

    info!(target: LOG_TARGET, "🌐 Listening on {}", config.bind);
    info!(target: LOG_TARGET,
        "🧵 {} workers per search, {} zero bits, CORS origin {}",
        config.search.workers,
        config.search.difficulty.zero_bits(),
        config.allowed_origin
    );
    info!(target: LOG_TARGET,
        "🎯 Expected ~{} hashes per solution",
        FormatUtils::format_number(config.search.difficulty.expected_attempts() as u64)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(target: LOG_TARGET, "🛑 Mining service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(target: LOG_TARGET, "❌ Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Decode the payload, search, and return the nonce as decimal text.
async fn mine_handler(State(state): State<AppState>, body: Bytes) -> Result<String, MinerError> {
    debug!(target: LOG_TARGET, "📥 Mine request ({} bytes)", body.len());

    let payload: MineRequest = serde_json::from_slice(&body)?;
    let request = SearchRequest::new(&payload.current_hash, &payload.sign)?;

    let miner = CpuMiner::new(state.search.as_ref().clone());
    let report = tokio::task::spawn_blocking(move || miner.search(&request)).await??;
    let nonce = report.outcome.into_nonce()?;

    info!(target: LOG_TARGET,
        "✅ challenge={} signer={} nonce={} attempts={} elapsed={}",
        hex::encode(request.challenge),
        hex::encode(request.signer),
        nonce,
        report.attempts,
        FormatUtils::format_duration(report.elapsed)
    );

    Ok(nonce.to_string())
}

// Changelog:
// - v1.0.0 (2026-10-15): Initial mining service.
//   - POST /mine with base64 JSON fields, decimal nonce response.
//   - Single-origin CORS policy, /health probe, graceful Ctrl-C shutdown.
//   - Logs the expected hashes per solution at startup.
