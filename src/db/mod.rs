//! SQLite-backed document store: the shared backend of the remote
//! repository and of the identity service.

pub mod documents;
pub mod identities;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
