//! Draft slot persistence
//!
//! Each slot holds one JSON-serialized `EventDraft`. Saving replaces the
//! whole slot.

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::{instrument, warn};

use super::parse::OptionalExt;
use crate::error::Result;
use crate::models::EventDraft;

pub struct DraftSlotStore<'a> {
    conn: &'a Connection,
}

impl<'a> DraftSlotStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    #[instrument(skip(self, draft))]
    pub fn save(&self, slot_key: &str, draft: &EventDraft) -> Result<()> {
        let json = serde_json::to_string(draft)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO draft_slots (slot_key, draft_json, updated_at)
             VALUES (?1, ?2, ?3)",
            params![slot_key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load the draft in a slot. A slot that no longer parses counts as empty.
    #[instrument(skip(self))]
    pub fn load(&self, slot_key: &str) -> Result<Option<EventDraft>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT draft_json FROM draft_slots WHERE slot_key = ?1",
                params![slot_key],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            None => Ok(None),
            Some(json) => match serde_json::from_str(&json) {
                Ok(draft) => Ok(Some(draft)),
                Err(e) => {
                    warn!(slot_key, error = %e, "Discarding unreadable draft");
                    Ok(None)
                }
            },
        }
    }

    pub fn clear(&self, slot_key: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM draft_slots WHERE slot_key = ?1",
            params![slot_key],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::EventDraft;
    use crate::storage::Database;

    #[test]
    fn test_slots_are_independent() {
        let db = Database::open_in_memory().unwrap();
        let mut a = EventDraft::new();
        a.name = "A".into();
        let mut b = EventDraft::new();
        b.name = "B".into();

        db.drafts().save("eventData:a", &a).unwrap();
        db.drafts().save("eventData:b", &b).unwrap();

        assert_eq!(db.drafts().load("eventData:a").unwrap().unwrap().name, "A");
        assert_eq!(db.drafts().load("eventData:b").unwrap().unwrap().name, "B");

        db.drafts().clear("eventData:a").unwrap();
        assert!(db.drafts().load("eventData:a").unwrap().is_none());
        assert!(db.drafts().load("eventData:b").unwrap().is_some());
    }

    #[test]
    fn test_save_overwrites() {
        let db = Database::open_in_memory().unwrap();
        let mut draft = EventDraft::new();
        draft.name = "First".into();
        db.drafts().save("eventData", &draft).unwrap();
        draft.name = "Second".into();
        db.drafts().save("eventData", &draft).unwrap();

        assert_eq!(db.drafts().load("eventData").unwrap().unwrap().name, "Second");
    }

    #[test]
    fn test_corrupt_slot_reads_as_empty() {
        let db = Database::open_in_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO draft_slots (slot_key, draft_json, updated_at) VALUES ('eventData', '{not json', 'now')",
                [],
            )
            .unwrap();
        assert!(db.drafts().load("eventData").unwrap().is_none());
    }
}
