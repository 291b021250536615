//! Exchange-rate payloads exchanged over JSON.
//!
//! `UpstreamResponse`/`RateQuote` mirror the upstream API document, `RateResponse` is what
//! the server hands to the client, and `ErrorResponse` is the body of every failed request.
//! All numeric-looking fields are kept as text exactly as the upstream sends them.
use serde::{Deserialize, Serialize};

/// Upstream document: the quote is nested under the currency pair key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamResponse {
    /// Latest USD/BRL quote.
    #[serde(rename = "USDBRL")]
    pub usd_brl: RateQuote,
}

/// Exchange-rate quote for a single currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`).
    pub codein: String,
    /// Human-readable pair name.
    pub name: String,
    /// Daily high.
    pub high: String,
    /// Daily low.
    pub low: String,
    /// Bid variation.
    pub var_bid: String,
    /// Percentage change.
    pub pct_change: String,
    /// Buy price.
    pub bid: String,
    /// Sell price.
    pub ask: String,
    /// Unix timestamp of the quote, in seconds.
    pub timestamp: String,
    /// Local creation date as formatted by the upstream.
    #[serde(rename = "create_date")]
    pub create_date: String,
}

/// Successful server response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResponse {
    /// Bid copied unchanged from the upstream quote.
    pub bid: String,
}

impl From<&RateQuote> for RateResponse {
    fn from(quote: &RateQuote) -> Self {
        RateResponse {
            bid: quote.bid.clone(),
        }
    }
}

/// Body of a failed server response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed, human-readable failure description.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body with the given message.
    pub fn new(message: &str) -> Self {
        ErrorResponse {
            message: String::from(message),
        }
    }
}
