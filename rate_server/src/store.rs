//! SQLite persistence for fetched bids.
//!
//! Every persist call opens its own connection, creates the `exchange_rate` table if it is
//! missing and inserts one row keyed by a fresh UUID, then closes the connection. Rows are
//! never updated or deleted.
//!
//! The call is bounded twice by the same budget: the async side stops waiting for the
//! blocking worker when the budget runs out, and the worker itself aborts SQLite work
//! (busy waits and running statements) once the deadline has passed, so a late insert is
//! not committed behind the caller's back.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::debug;
use rusqlite::{Connection, ErrorCode, params};
use uuid::Uuid;

use crate::error::PersistError;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS exchange_rate (id TEXT PRIMARY KEY, bid TEXT)";
const INSERT_RECORD: &str = "INSERT INTO exchange_rate (id, bid) VALUES (?1, ?2)";

/// Number of SQLite VM instructions between deadline checks.
const PROGRESS_OPS: i32 = 100;

/// One persisted bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    /// Random UUID v4, primary key.
    pub id: String,
    /// Bid as received from the upstream.
    pub bid: String,
}

impl RateRecord {
    /// Creates a record for `bid` with a freshly generated identifier.
    pub fn new(bid: &str) -> Self {
        RateRecord {
            id: Uuid::new_v4().to_string(),
            bid: String::from(bid),
        }
    }
}

/// Handle to the database file; holds no open connection.
#[derive(Debug, Clone)]
pub struct RateStore {
    path: PathBuf,
    deadline: Duration,
}

impl RateStore {
    /// Creates a store writing to `path`, each persist bounded by `deadline`.
    pub fn new(path: impl Into<PathBuf>, deadline: Duration) -> Self {
        Self {
            path: path.into(),
            deadline,
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a new record for `bid`, returning it once committed.
    pub async fn persist(&self, bid: &str) -> Result<RateRecord, PersistError> {
        let record = RateRecord::new(bid);
        let expires_at = Instant::now().checked_add(self.deadline);

        let path = self.path.clone();
        let budget = self.deadline;
        let row = record.clone();
        let worker =
            tokio::task::spawn_blocking(move || insert_record(&path, &row, expires_at, budget));

        match tokio::time::timeout(self.deadline, worker).await {
            Ok(joined) => joined??,
            Err(_) => return Err(PersistError::Timeout(self.deadline)),
        }

        debug!("Persisted record {} with bid {}", record.id, record.bid);
        Ok(record)
    }
}

fn insert_record(
    path: &Path,
    record: &RateRecord,
    expires_at: Option<Instant>,
    budget: Duration,
) -> Result<(), PersistError> {
    if is_expired(expires_at) {
        return Err(PersistError::Timeout(budget));
    }

    let conn = Connection::open(path)?;
    conn.busy_timeout(remaining(expires_at))?;
    conn.progress_handler(PROGRESS_OPS, Some(move || is_expired(expires_at)));

    let classify = |e| deadline_error(e, expires_at, budget);
    conn.execute(CREATE_TABLE, []).map_err(classify)?;
    if is_expired(expires_at) {
        return Err(PersistError::Timeout(budget));
    }
    let mut stmt = conn.prepare(INSERT_RECORD).map_err(classify)?;
    stmt.execute(params![record.id, record.bid]).map_err(classify)?;

    if is_expired(expires_at) {
        // Committed, but the caller has already been told it failed.
        debug!("Record {} committed after the persist deadline", record.id);
    }
    Ok(())
}

fn is_expired(expires_at: Option<Instant>) -> bool {
    expires_at.is_some_and(|at| Instant::now() >= at)
}

fn remaining(expires_at: Option<Instant>) -> Duration {
    // SQLite takes the busy timeout as an i32 of milliseconds.
    let cap = Duration::from_millis(i32::MAX as u64);
    match expires_at {
        Some(at) => at.saturating_duration_since(Instant::now()).min(cap),
        None => cap,
    }
}

/// Interrupts from the progress handler, and lock waits that outlived the deadline, are
/// reported as timeouts.
fn deadline_error(
    err: rusqlite::Error,
    expires_at: Option<Instant>,
    budget: Duration,
) -> PersistError {
    match err.sqlite_error_code() {
        Some(ErrorCode::OperationInterrupted) => PersistError::Timeout(budget),
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) if is_expired(expires_at) => {
            PersistError::Timeout(budget)
        }
        _ => PersistError::Sqlite(err),
    }
}
