//! Document collection primitives of the shared store: whole-document
//! writes and full collection reads.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

/// Raw stored document.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub doc_id: String,
    pub body: String,
}

/// Create or replace the whole document `doc_id` of `collection`.
pub fn set_document(conn: &Connection, collection: &str, doc_id: &str, body: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO documents (collection, doc_id, body, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(collection, doc_id)
         DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
        params![collection, doc_id, body, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Every document of `collection`, ordered by id.
pub fn list_documents(conn: &Connection, collection: &str) -> AppResult<Vec<StoredDocument>> {
    let mut stmt = conn.prepare_cached(
        "SELECT doc_id, body FROM documents
         WHERE collection = ?1
         ORDER BY doc_id ASC",
    )?;

    let rows = stmt.query_map([collection], |row| {
        Ok(StoredDocument {
            doc_id: row.get(0)?,
            body: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// SQLite's per-connection change counter: it moves whenever another
/// connection commits to the database file.
pub fn data_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA data_version", [], |row| row.get(0))?)
}
