//! HTTP surface of the rate server.
//!
//! A single route, `GET /cotacao`, runs the whole chain for each request: fetch the quote
//! from the upstream, persist its bid, answer with `{"bid": ...}`. Each step has its own
//! deadline and the chain stops at the first failure, which is logged and answered with a
//! `500` carrying a fixed message.
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::{error, info, warn};
use rate_common::net::RATE_PATH;
use rate_common::{ErrorResponse, RateResponse};

use crate::error::Result;
use crate::store::RateStore;
use crate::upstream::UpstreamClient;

/// Per-request dependencies; cloned into every handler invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    upstream: UpstreamClient,
    store: RateStore,
}

impl AppState {
    /// Bundles the upstream client and the store.
    pub fn new(upstream: UpstreamClient, store: RateStore) -> Self {
        Self { upstream, store }
    }
}

/// Builds the router serving [`RATE_PATH`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(RATE_PATH, get(get_rate))
        .with_state(state)
}

async fn get_rate(State(state): State<AppState>) -> Response {
    match fetch_and_persist(&state).await {
        Ok(rate) => (StatusCode::OK, Json(rate)).into_response(),
        Err(e) => {
            if e.is_timeout() {
                warn!("Request to {} ran out of time: {}", RATE_PATH, e);
            } else {
                error!("Request to {} failed: {}", RATE_PATH, e);
            }
            let body = ErrorResponse::new(e.public_message());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn fetch_and_persist(state: &AppState) -> Result<RateResponse> {
    let quote = state.upstream.fetch_quote().await?;
    let record = state.store.persist(&quote.bid).await?;
    info!("Stored bid {} as {}", record.bid, record.id);
    Ok(RateResponse::from(&quote))
}
