//!
//! Common types and utilities shared by the rate server and client.
//!
//! This crate aggregates:
//! - `error` - `CallError`, the failure of a deadline-bounded HTTP JSON call.
//! - `result` - handy `Result<T, CallError>` alias.
//! - `rate` - JSON payloads exchanged with the upstream API and between client and server.
//! - `http` - the shared `GET` + JSON decode under a hard deadline.
//! - `net` - named endpoints, deadlines and file names with their defaults.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod rate;
pub mod http;
pub mod net;

pub use error::CallError;
pub use result::Result;
pub use rate::{ErrorResponse, RateQuote, RateResponse, UpstreamResponse};
