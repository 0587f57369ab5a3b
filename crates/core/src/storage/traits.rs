//! Storage traits
//!
//! The draft hand-off between the composer and the publish page goes through
//! `DraftStore`, so the wizard works the same over memory or SQLite.

use crate::error::Result;
use crate::models::EventDraft;

/// Well-known key of the draft hand-off slot
pub const DRAFT_KEY: &str = "eventData";

/// Single-slot store for the draft being authored
pub trait DraftStore {
    /// Read the stored draft, if any
    fn load(&self) -> Result<Option<EventDraft>>;

    /// Replace the stored draft
    fn save(&mut self, draft: &EventDraft) -> Result<()>;

    /// Remove the stored draft
    fn clear(&mut self) -> Result<()>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_none())
    }
}
