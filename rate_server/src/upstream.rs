//! Client for the upstream exchange-rate API.
use std::time::Duration;

use log::debug;
use rate_common::http::get_json;
use rate_common::{RateQuote, UpstreamResponse};

use crate::error::{Result, ServerError};

/// Fetches the latest quote from the upstream API under a fixed deadline.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    deadline: Duration,
}

impl UpstreamClient {
    /// Creates a client for `url` whose calls are bounded by `deadline`.
    pub fn new(url: &str, deadline: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: String::from(url),
            deadline,
        }
    }

    /// One `GET` to the upstream, decoded into a [`RateQuote`]. No retry.
    pub async fn fetch_quote(&self) -> Result<RateQuote> {
        let response: UpstreamResponse = get_json(&self.http, &self.url, self.deadline)
            .await
            .map_err(ServerError::Fetch)?;
        debug!("Upstream quote: {:?}", response.usd_brl);
        Ok(response.usd_brl)
    }
}
