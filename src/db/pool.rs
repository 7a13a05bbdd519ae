//! SQLite connection wrapper for the document store (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        // Several CLI processes may share one store file.
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
