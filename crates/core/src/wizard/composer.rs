//! Draft composer
//!
//! Collects the fields of an `EventDraft` from the add-event form.

use chrono::{NaiveDate, NaiveTime};

use crate::error::DraftError;
use crate::models::{
    AccessMode, AgeRange, AttendeeLimit, AttendeeType, EventCategory, EventDraft, EventFeature,
    ImagePreview, LocationType,
};

/// Form state behind the add-event page
#[derive(Debug, Clone, Default)]
pub struct DraftComposer {
    draft: EventDraft,
}

impl DraftComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen the form with a previously stored draft
    pub fn from_draft(draft: EventDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.draft.host = host.into();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.draft.date = date;
    }

    pub fn set_start_time(&mut self, time: Option<NaiveTime>) {
        self.draft.start_time = time;
    }

    pub fn set_end_time(&mut self, time: Option<NaiveTime>) {
        self.draft.end_time = time;
    }

    /// Pick the event category, replacing any earlier pick
    pub fn select_category(&mut self, category: EventCategory) {
        self.draft.event_category = Some(category);
    }

    pub fn clear_category(&mut self) {
        self.draft.event_category = None;
    }

    pub fn set_location_type(&mut self, location_type: LocationType) {
        self.draft.location_type = location_type;
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.draft.address = address.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_attendee_limit(&mut self, limit: AttendeeLimit) {
        self.draft.attendee_limit = limit;
    }

    pub fn set_access_mode(&mut self, mode: AccessMode) {
        self.draft.access_mode = mode;
    }

    pub fn set_event_has(&mut self, feature: EventFeature, checked: bool) {
        if checked {
            self.draft.event_has.insert(feature);
        } else {
            self.draft.event_has.remove(&feature);
        }
    }

    pub fn set_attendee_type(&mut self, attendee: AttendeeType, checked: bool) {
        if checked {
            self.draft.attendee_type.insert(attendee);
        } else {
            self.draft.attendee_type.remove(&attendee);
        }
    }

    pub fn set_age_range(&mut self, range: AgeRange) {
        self.draft.age_range = range;
    }

    /// Blank input clears the link
    pub fn set_ticket_link(&mut self, link: impl Into<String>) {
        let link = link.into();
        self.draft.ticket_link = if link.trim().is_empty() {
            None
        } else {
            Some(link)
        };
    }

    pub fn set_carticket_required(&mut self, required: bool) {
        self.draft.carticket_required = required;
    }

    pub fn attach_image(&mut self, image: ImagePreview) {
        self.draft.image = Some(image);
    }

    pub fn remove_image(&mut self) {
        self.draft.image = None;
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        self.draft.validate()
    }

    /// Copy of the current field state, for hand-off
    pub fn snapshot(&self) -> EventDraft {
        self.draft.clone()
    }
}
