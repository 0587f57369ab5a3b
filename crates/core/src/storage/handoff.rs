//! Draft store implementations

use std::sync::{Arc, Mutex};

use tracing::warn;
use uuid::Uuid;

use super::traits::{DraftStore, DRAFT_KEY};
use super::Database;
use crate::error::{Error, Result};
use crate::models::EventDraft;

/// In-process slot holding the serialized draft
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: Option<String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized contents of the slot
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<EventDraft>> {
        match &self.slot {
            Some(json) => match serde_json::from_str(json) {
                Ok(draft) => Ok(Some(draft)),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable draft");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn save(&mut self, draft: &EventDraft) -> Result<()> {
        self.slot = Some(serde_json::to_string(draft)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

/// Draft slot persisted in SQLite, keyed per session or user
pub struct SqliteDraftStore {
    db: Arc<Mutex<Database>>,
    slot_key: String,
}

impl SqliteDraftStore {
    pub fn new(db: Arc<Mutex<Database>>, owner: Uuid) -> Self {
        Self {
            db,
            slot_key: format!("{}:{}", DRAFT_KEY, owner),
        }
    }

    /// Slot shared by everyone without a session
    pub fn anonymous(db: Arc<Mutex<Database>>) -> Self {
        Self {
            db,
            slot_key: DRAFT_KEY.to_string(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    fn with_db<T>(&self, f: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
        let db = self
            .db
            .lock()
            .map_err(|_| Error::InvalidOperation("database lock poisoned".into()))?;
        f(&db)
    }
}

impl DraftStore for SqliteDraftStore {
    fn load(&self) -> Result<Option<EventDraft>> {
        self.with_db(|db| db.drafts().load(&self.slot_key))
    }

    fn save(&mut self, draft: &EventDraft) -> Result<()> {
        self.with_db(|db| db.drafts().save(&self.slot_key, draft))
    }

    fn clear(&mut self) -> Result<()> {
        self.with_db(|db| db.drafts().clear(&self.slot_key))
    }
}
