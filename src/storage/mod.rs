pub mod draft;
pub mod local;

pub use draft::{DRAFT_KEY, DraftStore};
pub use local::LocalStorage;
