//! Deadline-bounded HTTP `GET` with JSON decoding.
//!
//! The deadline is measured from the moment the call starts and covers connecting,
//! sending, receiving the whole body and decoding it. When it expires the in-flight
//! request is dropped, which cancels only this call.
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::CallError;
use crate::result::Result;

/// Issues a `GET` to `url` and decodes the JSON body as `T`, failing with
/// [`CallError::Timeout`] when the whole exchange takes longer than `deadline`.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    deadline: Duration,
) -> Result<T> {
    match tokio::time::timeout(deadline, fetch_json(client, url)).await {
        Ok(result) => result,
        Err(_) => Err(CallError::Timeout(deadline)),
    }
}

async fn fetch_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CallError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let decoded = serde_json::from_slice(&body)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::RateResponse;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::net::SocketAddr;

    async fn spawn_stub() -> SocketAddr {
        let app = Router::new()
            .route("/ok", get(|| async { r#"{"bid":"5.43"}"# }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    r#"{"bid":"5.43"}"#
                }),
            )
            .route("/garbage", get(|| async { "not json" }))
            .route(
                "/fail",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"x"}"#) }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn decodes_body_within_deadline() {
        let addr = spawn_stub().await;
        let client = reqwest::Client::new();

        let response: RateResponse =
            get_json(&client, &format!("http://{}/ok", addr), Duration::from_secs(2))
                .await
                .unwrap();
        assert_eq!(response.bid, "5.43");
    }

    #[tokio::test]
    async fn slow_peer_hits_deadline() {
        let addr = spawn_stub().await;
        let client = reqwest::Client::new();
        let deadline = Duration::from_millis(100);

        let err = get_json::<RateResponse>(&client, &format!("http://{}/slow", addr), deadline)
            .await
            .unwrap_err();
        assert!(matches!(err, CallError::Timeout(d) if d == deadline));
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn client_side_timeout_is_still_a_timeout() {
        let addr = spawn_stub().await;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();

        let err = get_json::<RateResponse>(
            &client,
            &format!("http://{}/slow", addr),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CallError::Transport(_)));
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let addr = spawn_stub().await;
        let client = reqwest::Client::new();

        let err = get_json::<RateResponse>(
            &client,
            &format!("http://{}/garbage", addr),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CallError::Decode(_)));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let addr = spawn_stub().await;
        let client = reqwest::Client::new();

        let err = get_json::<RateResponse>(
            &client,
            &format!("http://{}/fail", addr),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CallError::Status(500)));
    }

    #[tokio::test]
    async fn unreachable_peer_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = reqwest::Client::new();

        let err = get_json::<RateResponse>(
            &client,
            &format!("http://{}/ok", addr),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CallError::Transport(_)));
    }
}
