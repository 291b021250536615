//! Error type shared between client and server.
//!
//! Both processes make exactly one kind of outbound call: an HTTP `GET` whose JSON body is
//! decoded under a hard deadline. `CallError` classifies every way that call can fail so
//! the server can report it as a fetch failure and the client as a fatal call failure.
use std::time::Duration;

use thiserror::Error;

/// Failure of a deadline-bounded HTTP JSON call.
#[derive(Error, Debug)]
pub enum CallError {
    /// Connection, TLS, or body transfer failure reported by `reqwest`.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The peer answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The body was received but is not the expected JSON document.
    #[error("JSON deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call did not complete before its deadline.
    #[error("Deadline of {0:?} exceeded")]
    Timeout(Duration),
}

impl CallError {
    /// Returns `true` when the call was cut short by its deadline.
    pub fn is_timeout(&self) -> bool {
        match self {
            CallError::Timeout(_) => true,
            CallError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}
