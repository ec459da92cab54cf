use crate::error::{Result, StoreError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Synchronous key-value byte store. Writes may fail (quota, I/O); callers
/// decide whether that is fatal.
pub trait ByteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
    /// Returns whether the key was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

pub struct KvRepo<'a> {
    conn: &'a Connection,
    quota_bytes: Option<usize>,
}

impl<'a> KvRepo<'a> {
    pub fn new(conn: &'a Connection, quota_bytes: Option<usize>) -> Self {
        Self { conn, quota_bytes }
    }

    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Replaces the whole value in one statement; an over-quota write leaves
    /// the previous value in place.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    limit,
                });
            }
        }

        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
               value = excluded.value,
               updated_at = excluded.updated_at;",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(removed > 0)
    }
}
