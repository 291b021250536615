//! Output file rendering.
use std::fs;
use std::path::Path;

use rate_common::RateResponse;

use crate::error::Result;

/// Renders the single line written to the output file.
pub fn render(rate: &RateResponse) -> String {
    format!("Dólar: {}", rate.bid)
}

/// Replaces the content of `path` with the rendered rate, creating the file if needed.
pub fn write_rate(path: &Path, rate: &RateResponse) -> Result<()> {
    fs::write(path, render(rate))?;
    Ok(())
}
