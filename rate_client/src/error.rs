//! Error types used across the rate client.
//!
//! Every variant is fatal: `main` returns it and the process exits with a non-zero status.
use std::io;

use rate_common::CallError;
use thiserror::Error;

/// Unified error type for the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network, status, decode or deadline failure while calling the server.
    #[error("Call to rate server failed: {0}")]
    Call(#[from] CallError),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Crate-wide `Result` alias with `ClientError` as the default error.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
