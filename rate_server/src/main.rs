//! Exchange rate HTTP server.
//!
//! This binary serves `GET /cotacao`. Every request runs one linear, deadline-bounded chain:
//!
//! - `UpstreamClient` - fetches the latest USD/BRL quote from the upstream API (200 ms).
//! - `RateStore` - opens the SQLite file, ensures the `exchange_rate` table and inserts the
//!   bid under a fresh UUID (20 ms).
//! - `api` - answers `200 {"bid": ...}`, or `500 {"message": ...}` with a fixed message when
//!   either step fails. Failures are logged with their detail; callers never see it.
//!
//! Requests are independent: no in-process state is shared besides the immutable config,
//! nothing is retried, and a deadline expiring cancels only the step it bounds.
//!
//! Note: This file only orchestrates; the request chain lives in `api`, `upstream` and `store`.
#![warn(missing_docs)]
use crate::api::AppState;
use crate::args::Args;
use crate::store::RateStore;
use crate::upstream::UpstreamClient;
use clap::Parser;
use log::info;
use std::time::Duration;

mod api;
mod args;
mod error;
mod store;
mod upstream;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logger();
    let args = Args::parse();

    let upstream = UpstreamClient::new(
        &args.upstream_url,
        Duration::from_millis(args.fetch_timeout_ms),
    );
    let store = RateStore::new(
        &args.database_path,
        Duration::from_millis(args.persist_timeout_ms),
    );
    info!(
        "Upstream: {} ({} ms), store: {} ({} ms)",
        args.upstream_url,
        args.fetch_timeout_ms,
        store.path().display(),
        args.persist_timeout_ms
    );

    let listener = tokio::net::TcpListener::bind(&args.bind_address).await?;
    info!("Rate server is started on {}", listener.local_addr()?);

    axum::serve(listener, api::router(AppState::new(upstream, store))).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();
}
