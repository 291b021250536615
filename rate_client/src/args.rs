//! Command-line arguments for the rate client.
//!
//! This module defines the CLI interface using `clap`. All flags are optional and default
//! to the values in `rate_common::net`.
use clap::Parser;
use rate_common::net;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the rate server endpoint.
    #[clap(long, default_value_t = net::server_url())]
    pub server_url: String,

    /// File overwritten with the received bid.
    #[clap(long, default_value = net::OUTPUT_FILE)]
    pub output: String,

    /// Deadline for the call to the server, in milliseconds.
    #[clap(long, default_value_t = net::CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}
