use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    log::info!("Migration applied: {version}");
    Ok(())
}

/// Document collections: one row per (collection path, document id).
fn create_documents_table(conn: &Connection) -> Result<()> {
    let version = "20260101_0001_create_documents";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection  TEXT NOT NULL,
            doc_id      TEXT NOT NULL,
            body        TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (collection, doc_id)
        );
        "#,
    )?;

    mark_applied(conn, version, "Created documents table")
}

/// Identities issued by the store's identity service.
fn create_identity_tables(conn: &Connection) -> Result<()> {
    let version = "20260101_0002_create_identities";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS identities (
            uid           TEXT PRIMARY KEY,
            is_anonymous  INTEGER NOT NULL DEFAULT 1,
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS identity_tokens (
            token       TEXT PRIMARY KEY,
            uid         TEXT NOT NULL REFERENCES identities(uid),
            created_at  TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created identities and identity_tokens tables")
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_documents_table(conn)?;
    create_identity_tables(conn)?;
    Ok(())
}
