//! Preferences persistence
//!
//! Device-wide settings stored as key/value rows, such as the interface
//! language chosen with the navbar toggle.

use chrono::Utc;
use rusqlite::{params, Connection};

use super::parse::OptionalExt;
use crate::error::Result;
use crate::i18n::Locale;

const LANGUAGE_KEY: &str = "language";

/// Preferences store
pub struct PreferencesStore<'a> {
    conn: &'a Connection,
}

impl<'a> PreferencesStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Remember the chosen interface language
    pub fn set_language(&self, locale: Locale) -> Result<()> {
        self.set(LANGUAGE_KEY, locale.code())
    }

    /// Stored language; unrecognised values are ignored
    pub fn language(&self) -> Result<Option<Locale>> {
        Ok(self
            .get(LANGUAGE_KEY)?
            .and_then(|code| code.parse::<Locale>().ok()))
    }
}
