pub mod db;
pub mod error;
pub mod gateway;
pub mod kv;
pub mod migrate;
pub mod paths;
pub mod session;

use crate::error::Result;
use crate::kv::{ByteStore, KvRepo};
use rusqlite::Connection;
use std::path::Path;

pub use gateway::{Gateway, LoadIssue, LoadOutcome, STATE_KEY};
pub use session::{Commit, Session};

pub struct Store {
    conn: Connection,
    quota_bytes: Option<usize>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self {
            conn,
            quota_bytes: None,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self {
            conn,
            quota_bytes: None,
        })
    }

    /// Caps the size of any single stored value.
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn kv(&self) -> KvRepo<'_> {
        KvRepo::new(&self.conn, self.quota_bytes)
    }
}

impl ByteStore for Store {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.kv().get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.kv().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        self.kv().remove(key)
    }
}
