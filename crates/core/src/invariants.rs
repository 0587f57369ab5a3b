//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{FinalizedEvent, PublishTier};

/// Validate that a finalized event agrees with its publishing tier
pub fn assert_finalized_invariants(event: &FinalizedEvent) {
    debug_assert_eq!(
        event.featured,
        event.publishing_type == PublishTier::Featured,
        "Event '{}' featured flag disagrees with tier {}",
        event.draft.name,
        event.publishing_type
    );

    match event.publishing_type {
        PublishTier::ExtraLinks => debug_assert!(
            !event.extra_links.is_empty(),
            "Event '{}' chose extra links but carries none",
            event.draft.name
        ),
        PublishTier::Free | PublishTier::Featured => debug_assert!(
            event.extra_links.is_empty(),
            "Event '{}' carries {} extra links on tier {}",
            event.draft.name,
            event.extra_links.len(),
            event.publishing_type
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventDraft, ExtraLink, PublishSelection};
    use chrono::{NaiveDate, NaiveTime};

    fn complete() -> EventDraft {
        EventDraft {
            name: "Test Event".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            start_time: NaiveTime::from_hms_opt(19, 0, 0),
            end_time: NaiveTime::from_hms_opt(22, 0, 0),
            description: "desc".into(),
            ..EventDraft::default()
        }
    }

    #[test]
    fn test_valid_events() {
        assert_finalized_invariants(&FinalizedEvent::new(complete(), PublishSelection::Free));
        assert_finalized_invariants(&FinalizedEvent::new(complete(), PublishSelection::Featured));
        assert_finalized_invariants(&FinalizedEvent::new(
            complete(),
            PublishSelection::ExtraLinks(vec![ExtraLink::default()]),
        ));
    }

    #[test]
    #[should_panic(expected = "featured flag disagrees")]
    fn test_featured_mismatch() {
        let mut event = FinalizedEvent::new(complete(), PublishSelection::Free);
        event.featured = true;
        assert_finalized_invariants(&event);
    }

    #[test]
    #[should_panic(expected = "carries none")]
    fn test_empty_extra_links() {
        let event = FinalizedEvent::new(complete(), PublishSelection::ExtraLinks(Vec::new()));
        assert_finalized_invariants(&event);
    }
}
