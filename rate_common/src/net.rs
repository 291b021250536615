//! Shared networking constants, deadlines and file names used by client and server.
//!
//! Every value here is a default: both binaries expose a flag to override it.

/// TCP port the rate server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Path of the single endpoint served by the rate server.
pub const RATE_PATH: &str = "/cotacao";
/// Upstream endpoint returning the latest USD/BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Deadline for the server's call to the upstream API.
pub const FETCH_TIMEOUT_MS: u64 = 200;
/// Deadline for opening the store, ensuring the table and inserting one record.
pub const PERSIST_TIMEOUT_MS: u64 = 20;
/// Deadline for the client's call to the rate server.
pub const CLIENT_TIMEOUT_MS: u64 = 300;
/// SQLite database file written by the server.
pub const DATABASE_PATH: &str = "exchange.db";
/// Text file written by the client.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Default bind address of the rate server (all interfaces).
pub fn bind_address() -> String {
    addr("0.0.0.0", SERVER_PORT)
}

/// Default URL the client calls.
pub fn server_url() -> String {
    format!("http://{}{}", addr("localhost", SERVER_PORT), RATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_endpoint() {
        assert_eq!(bind_address(), "0.0.0.0:8080");
        assert_eq!(server_url(), "http://localhost:8080/cotacao");
    }
}
