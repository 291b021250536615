//! One-shot call to the rate server.
use std::time::Duration;

use log::info;
use rate_common::RateResponse;
use rate_common::http::get_json;

use crate::error::Result;

/// Asks the server at `url` for the current bid, giving up after `deadline`.
pub async fn fetch_rate(url: &str, deadline: Duration) -> Result<RateResponse> {
    info!("Requesting exchange rate from {}", url);
    let client = reqwest::Client::new();
    let rate = get_json(&client, url, deadline).await?;
    Ok(rate)
}
