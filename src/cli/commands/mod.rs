pub mod admin;
pub mod call;
pub mod class;
pub mod config;
pub mod draft;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod student;
pub mod submit;
pub mod token;

use crate::core::clock::SystemClock;
use crate::core::form::FormController;
use crate::environment::Environment;
use crate::storage::DraftStore;

/// Form controller over the persisted draft, for commands that only edit it.
pub(crate) fn open_form(env: &Environment) -> FormController<SystemClock> {
    FormController::new(DraftStore::new(env.storage.clone()), env.profile, SystemClock)
}
