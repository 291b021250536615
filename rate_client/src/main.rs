//! Rate Client - asks the rate server for the current USD/BRL bid once and saves it.
//!
//! The call to the server is bounded by a hard deadline (300 ms by default). Any failure
//! (network, status, decode, deadline) ends the process with a non-zero exit code before
//! the output file is touched; on success the file is overwritten with `Dólar: <bid>`.
//!
//! Usage example (CLI):
//! ```bash
//! rate_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;
mod error;
mod fetcher;
mod output;

use crate::args::Args;
use crate::error::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Fetches the bid and writes it to the output file, returning the file path.
async fn run(args: &Args) -> Result<PathBuf> {
    let deadline = Duration::from_millis(args.timeout_ms);
    let rate = fetcher::fetch_rate(&args.server_url, deadline).await?;
    info!("Received bid {}", rate.bid);

    let path = normalize_path(&args.output);
    output::write_rate(&path, &rate)?;
    Ok(path)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let path = run(&args).await?;
    println!("Cotação salva em '{}'", path.display());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use rate_common::CallError;
    use std::fs;

    async fn server(body: &'static str, status: StatusCode, delay: Duration) -> String {
        let app = Router::new().route(
            "/cotacao",
            get(move || async move {
                tokio::time::sleep(delay).await;
                (status, body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/cotacao", addr)
    }

    fn args(server_url: String, output: &std::path::Path, timeout_ms: u64) -> Args {
        Args {
            server_url,
            output: output.display().to_string(),
            timeout_ms,
        }
    }

    #[tokio::test]
    async fn saves_bid_from_server() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let url = server(r#"{"bid":"5.43"}"#, StatusCode::OK, Duration::ZERO).await;

        let written = run(&args(url, &output, 2000)).await.unwrap();

        assert_eq!(written, output);
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.43");
    }

    #[tokio::test]
    async fn later_run_overwrites_earlier_value() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let first = server(r#"{"bid":"5.43"}"#, StatusCode::OK, Duration::ZERO).await;
        let second = server(r#"{"bid":"5.5"}"#, StatusCode::OK, Duration::ZERO).await;

        run(&args(first, &output, 2000)).await.unwrap();
        run(&args(second, &output, 2000)).await.unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.5");
    }

    #[tokio::test]
    async fn slow_server_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        fs::write(&output, "Dólar: 1.00").unwrap();
        let delay = Duration::from_millis(500);
        let url = server(r#"{"bid":"5.43"}"#, StatusCode::OK, delay).await;

        let err = run(&args(url, &output, 100)).await.unwrap_err();

        assert!(matches!(err, ClientError::Call(CallError::Timeout(_))));
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 1.00");
    }

    #[tokio::test]
    async fn server_failure_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let url = server(
            r#"{"message":"Failed to get exchange rate information"}"#,
            StatusCode::INTERNAL_SERVER_ERROR,
            Duration::ZERO,
        )
        .await;

        let err = run(&args(url, &output, 2000)).await.unwrap_err();

        assert!(matches!(err, ClientError::Call(CallError::Status(500))));
        assert!(!output.exists());
    }

    #[test]
    fn strips_matching_quotes() {
        let quoted = normalize_path(" \"out/cotacao.txt\" ");
        assert_eq!(quoted, PathBuf::from("out/cotacao.txt"));
        assert_eq!(normalize_path("cotacao.txt"), PathBuf::from("cotacao.txt"));
    }
}
