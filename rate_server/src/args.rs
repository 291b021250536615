//! Command-line arguments for the rate server.
//!
//! Every flag is optional; the defaults come from `rate_common::net`, so running the
//! binary without arguments serves `0.0.0.0:8080/cotacao` backed by `exchange.db`.
use clap::Parser;
use rate_common::net;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to.
    #[clap(long, default_value_t = net::bind_address())]
    pub bind_address: String,

    /// Upstream endpoint returning the USD/BRL quote.
    #[clap(long, default_value = net::UPSTREAM_URL)]
    pub upstream_url: String,

    /// SQLite database file receiving one row per served request.
    #[clap(long, default_value = net::DATABASE_PATH)]
    pub database_path: String,

    /// Deadline for the upstream call, in milliseconds.
    #[clap(long, default_value_t = net::FETCH_TIMEOUT_MS)]
    pub fetch_timeout_ms: u64,

    /// Deadline for persisting one record, in milliseconds.
    #[clap(long, default_value_t = net::PERSIST_TIMEOUT_MS)]
    pub persist_timeout_ms: u64,
}
