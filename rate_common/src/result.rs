//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to
//! `CallError`, so HTTP helpers can simply return `Result<T>`.
use crate::error::CallError;

/// Workspace-wide `Result` alias with `CallError` as the default error.
pub type Result<T, E = CallError> = std::result::Result<T, E>;
