use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Initialize the document store schema.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Open the document store at `path`, creating parent directories and the
/// schema when missing.
pub fn open_store(path: &Path) -> AppResult<DbPool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
