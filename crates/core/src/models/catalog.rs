//! Catalog event model

use chrono::NaiveDate;
use serde::Serialize;

/// A listed event shown on the home, listing and detail pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEvent {
    pub id: &'static str,
    pub title: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    /// Free-form time range, e.g. "19:00 - 22:00" or "All Weekend"
    pub time: &'static str,
    pub location: &'static str,
    pub image_url: &'static str,
    pub categories: &'static [&'static str],
    /// Only visible to members
    pub is_private: bool,
    pub is_new: bool,
}

impl CatalogEvent {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}
