//! SQLite implementation of the KeyValueStore trait.
//!
//! Blob lists are framed as CBOR and stored one row per key. Uses rusqlite
//! with bundled SQLite behind a Mutex; operations are synchronous.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use favkit_core::BlobList;

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::KeyValueStore;

/// SQLite-based key-value store.
///
/// Thread-safe via internal Mutex. Durable per write; `request_sync`
/// additionally nudges a passive WAL checkpoint, errors ignored.
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute an operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        f(&conn)
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<BlobList>> {
        self.with_conn(|conn| {
            let framed: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT blobs FROM kv WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;

            let Some(framed) = framed else {
                return Ok(None);
            };

            // A row that does not frame as a blob list counts as absent.
            match ciborium::from_reader(framed.as_slice()) {
                Ok(blobs) => Ok(Some(blobs)),
                Err(e) => {
                    tracing::warn!("ignoring malformed blob list at key {:?}: {}", key, e);
                    Ok(None)
                }
            }
        })
    }

    fn set(&self, key: &str, blobs: BlobList) -> Result<()> {
        let mut framed = Vec::new();
        ciborium::into_writer(&blobs, &mut framed)
            .map_err(|e| StoreError::Encoding(e.to_string()))?;

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, blobs, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    blobs = excluded.blobs,
                    updated_at = excluded.updated_at",
                params![key, framed, now_millis()],
            )?;
            Ok(())
        })
    }

    fn request_sync(&self) {
        let result = self.with_conn(|conn| {
            conn.query_row("PRAGMA wal_checkpoint(PASSIVE)", [], |_| Ok(()))?;
            Ok(())
        });

        if let Err(e) = result {
            tracing::debug!("sync hint ignored: {}", e);
        }
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
