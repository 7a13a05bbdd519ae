use super::{IdentityProvider, UserIdentity};
use crate::db::identities::{find_identity, insert_identity, insert_token, uid_for_token};
use crate::db::initialize::open_store;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::LocalStorage;
use std::path::Path;

/// Local storage key caching the anonymous session between invocations.
pub const AUTH_SESSION_KEY: &str = "auth_session";

/// Identity service living in the shared document store.
pub struct SqliteIdentityProvider {
    pool: DbPool,
    storage: LocalStorage,
}

impl SqliteIdentityProvider {
    pub fn open(database: &Path, storage: LocalStorage) -> AppResult<Self> {
        Ok(Self {
            pool: open_store(database)?,
            storage,
        })
    }

    /// Issue a bootstrap token for `uid` (created as a non-anonymous identity
    /// when unknown).
    pub fn issue_token(&self, uid: &str) -> AppResult<String> {
        let uid = uid.trim();
        if uid.is_empty() {
            return Err(AppError::Identity("uid must not be empty".into()));
        }

        insert_identity(&self.pool.conn, uid, false)?;
        let token = uuid::Uuid::new_v4().simple().to_string();
        insert_token(&self.pool.conn, &token, uid)?;

        audit(&self.pool.conn, "token", uid, "Bootstrap token issued")?;
        Ok(token)
    }

    fn cached_session(&self) -> Option<String> {
        match self.storage.get_item(AUTH_SESSION_KEY) {
            Ok(Some(uid)) => Some(uid.trim().to_string()).filter(|u| !u.is_empty()),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read cached auth session: {e}");
                None
            }
        }
    }
}

impl IdentityProvider for SqliteIdentityProvider {
    fn sign_in_with_token(&self, token: &str) -> AppResult<UserIdentity> {
        let uid = uid_for_token(&self.pool.conn, token)?
            .ok_or_else(|| AppError::Identity("unknown bootstrap token".into()))?;
        let is_anonymous = find_identity(&self.pool.conn, &uid)?.unwrap_or(false);

        Ok(UserIdentity { uid, is_anonymous })
    }

    fn sign_in_anonymously(&self) -> AppResult<UserIdentity> {
        if let Some(uid) = self.cached_session()
            && find_identity(&self.pool.conn, &uid)? == Some(true)
        {
            return Ok(UserIdentity {
                uid,
                is_anonymous: true,
            });
        }

        let uid = uuid::Uuid::new_v4().to_string();
        insert_identity(&self.pool.conn, &uid, true)?;
        self.storage.set_item(AUTH_SESSION_KEY, &uid)?;

        Ok(UserIdentity {
            uid,
            is_anonymous: true,
        })
    }
}
