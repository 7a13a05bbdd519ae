use super::local::LocalStorage;
use crate::errors::AppResult;
use crate::models::Draft;

/// Local storage key of the in-progress draft.
pub const DRAFT_KEY: &str = "attendanceData_Draft";

/// Single-slot persistence of the current draft.
#[derive(Debug, Clone)]
pub struct DraftStore {
    storage: LocalStorage,
}

impl DraftStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Load the stored draft.
    ///
    /// Missing key → `None`. An unreadable or malformed blob is logged and
    /// also reported as `None`, so the caller keeps its fresh template.
    pub fn load(&self) -> Option<Draft> {
        let raw = match self.storage.get_item(DRAFT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read local draft: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Draft>(&raw) {
            Ok(draft) => Some(draft),
            Err(e) => {
                log::warn!("Failed to load local draft, using a fresh one: {e}");
                None
            }
        }
    }

    pub fn save(&self, draft: &Draft) -> AppResult<()> {
        let json = serde_json::to_string(draft)?;
        self.storage.set_item(DRAFT_KEY, &json)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove_item(DRAFT_KEY)
    }
}
