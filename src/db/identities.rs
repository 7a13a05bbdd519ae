use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

pub fn insert_identity(conn: &Connection, uid: &str, is_anonymous: bool) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO identities (uid, is_anonymous, created_at)
         VALUES (?1, ?2, ?3)",
        params![uid, is_anonymous as i32, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// `Some(is_anonymous)` when `uid` is a known identity.
pub fn find_identity(conn: &Connection, uid: &str) -> AppResult<Option<bool>> {
    let found: Option<i32> = conn
        .query_row(
            "SELECT is_anonymous FROM identities WHERE uid = ?1",
            [uid],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.map(|v| v == 1))
}

pub fn insert_token(conn: &Connection, token: &str, uid: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO identity_tokens (token, uid, created_at) VALUES (?1, ?2, ?3)",
        params![token, uid, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn uid_for_token(conn: &Connection, token: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row(
            "SELECT uid FROM identity_tokens WHERE token = ?1",
            [token],
            |row| row.get(0),
        )
        .optional()?)
}
