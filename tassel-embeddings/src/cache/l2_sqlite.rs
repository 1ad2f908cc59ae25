//! L2 SQLite-backed embedding cache.
//!
//! Persists embeddings as `review_key → vector` rows, f32 little-endian
//! blobs. Survives process restarts. Append-only: no eviction, and
//! `INSERT OR REPLACE` makes the (deterministic-value) write race benign.

use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use tassel_core::errors::CacheError;
use tracing::warn;

/// Durable embedding cache backed by a SQLite file.
pub struct L2SqliteCache {
    conn: Mutex<Connection>,
}

impl L2SqliteCache {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: &str) -> Result<Self, CacheError> {
        let conn = Connection::open(path).map_err(|e| CacheError::OpenFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::init(&conn).map_err(|e| CacheError::OpenFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database — used by tests.
    pub fn open_in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory().map_err(|e| CacheError::OpenFailed {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Self::init(&conn).map_err(|e| CacheError::OpenFailed {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS embeddings (
                review_key TEXT PRIMARY KEY,
                vector     BLOB NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Look up an embedding by key.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        let conn = self.conn.lock().ok()?;
        let blob: Option<Vec<u8>> = conn
            .query_row(
                "SELECT vector FROM embeddings WHERE review_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .unwrap_or_else(|e| {
                warn!(key, error = %e, "L2 read failed");
                None
            });
        blob.map(|bytes| decode_vector(&bytes))
    }

    /// Store an embedding. A failed write is logged, not propagated —
    /// the value is recomputable.
    pub fn insert(&self, key: &str, embedding: &[f32]) {
        let Ok(conn) = self.conn.lock() else {
            warn!(key, "L2 lock poisoned, skipping write");
            return;
        };
        let bytes = encode_vector(embedding);
        if let Err(e) = conn.execute(
            "INSERT OR REPLACE INTO embeddings (review_key, vector) VALUES (?1, ?2)",
            params![key, bytes],
        ) {
            warn!(key, error = %e, "L2 write failed");
        }
    }

    /// Number of cached embeddings.
    pub fn len(&self) -> usize {
        let Ok(conn) = self.conn.lock() else {
            return 0;
        };
        conn.query_row("SELECT COUNT(*) FROM embeddings", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n as usize)
        .unwrap_or(0)
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a key exists without decoding its vector.
    pub fn contains(&self, key: &str) -> bool {
        let Ok(conn) = self.conn.lock() else {
            return false;
        };
        conn.query_row(
            "SELECT 1 FROM embeddings WHERE review_key = ?1",
            params![key],
            |_| Ok(()),
        )
        .optional()
        .map(|found| found.is_some())
        .unwrap_or(false)
    }
}

fn encode_vector(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn decode_vector(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        let embedding = vec![1.0f32, 2.5, -3.7, 0.0];
        cache.insert("deadbeef", &embedding);
        assert_eq!(cache.get("deadbeef"), Some(embedding));
    }

    #[test]
    fn miss_returns_none() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        assert!(cache.get("missing").is_none());
    }

    #[test]
    fn replace_is_idempotent() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        cache.insert("k", &[1.0]);
        cache.insert("k", &[1.0]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k"), Some(vec![1.0]));
    }

    #[test]
    fn contains_check() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        cache.insert("exists", &[1.0]);
        assert!(cache.contains("exists"));
        assert!(!cache.contains("nope"));
    }
}
