//! Error types used across the rate server crate.
//!
//! A request can fail in exactly two places: fetching the quote from the upstream API
//! (`ServerError::Fetch`) and persisting its bid (`ServerError::Persist`). Both are logged
//! with full detail and mapped to a fixed, detail-free message for the caller, see
//! [`ServerError::public_message`].
//!
//! Startup failures (binding, serving) never reach a handler and stay plain `std::io::Error`
//! in `main`.
//!
//! Conversions:
//! - `rusqlite::Error` and `tokio::task::JoinError` convert into `PersistError`.
//! - `PersistError` converts into `ServerError`.
use std::time::Duration;

use rate_common::CallError;
use thiserror::Error;

/// Message returned when the upstream quote could not be obtained.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to get exchange rate information";
/// Message returned when the quote could not be stored.
pub const PERSIST_FAILED_MESSAGE: &str = "Failed to persist the exchange rate information";

/// Store connection, statement or deadline failure.
#[derive(Error, Debug)]
pub enum PersistError {
    /// Opening the database, preparing or executing a statement failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The whole persist operation did not finish before its deadline.
    #[error("Persist deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// The blocking worker running the SQLite calls panicked or was cancelled.
    #[error("Store worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failure of one `GET /cotacao` request.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Upstream network, status, decode or deadline failure.
    #[error("Fetch error: {0}")]
    Fetch(#[source] CallError),

    /// Store failure after a successful fetch.
    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),
}

impl ServerError {
    /// Fixed message exposed to HTTP callers for this failure.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServerError::Fetch(_) => FETCH_FAILED_MESSAGE,
            ServerError::Persist(_) => PERSIST_FAILED_MESSAGE,
        }
    }

    /// Returns `true` when a step ran out of its deadline rather than failing outright.
    pub fn is_timeout(&self) -> bool {
        match self {
            ServerError::Fetch(e) => e.is_timeout(),
            ServerError::Persist(PersistError::Timeout(_)) => true,
            ServerError::Persist(_) => false,
        }
    }
}

/// Crate-wide `Result` alias with `ServerError` as the default error.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;
