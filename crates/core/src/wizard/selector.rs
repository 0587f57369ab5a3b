//! Publish tier selector
//!
//! Holds the tier choice and the extra-links list for one visit to the
//! publish page. The list survives switching tiers back and forth; it is
//! only used when the extra-links tier is confirmed.

use crate::models::{EventDraft, ExtraLink, FinalizedEvent, PublishSelection, PublishTier};

/// Which half of a link entry is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Title,
    Url,
}

#[derive(Debug, Clone)]
pub struct TierSelector {
    draft: EventDraft,
    tier: PublishTier,
    links: Vec<ExtraLink>,
}

impl TierSelector {
    pub fn new(draft: EventDraft) -> Self {
        Self {
            draft,
            tier: PublishTier::Free,
            links: vec![ExtraLink::default()],
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn tier(&self) -> PublishTier {
        self.tier
    }

    pub fn select_tier(&mut self, tier: PublishTier) {
        self.tier = tier;
    }

    pub fn links(&self) -> &[ExtraLink] {
        &self.links
    }

    /// Whether the extra-links inputs are shown
    pub fn shows_links(&self) -> bool {
        self.tier == PublishTier::ExtraLinks
    }

    /// Append one blank entry
    pub fn add_link(&mut self) {
        self.links.push(ExtraLink::default());
    }

    /// Remove an entry; the last remaining entry cannot be removed
    pub fn remove_link(&mut self, index: usize) -> bool {
        if self.links.len() <= 1 || index >= self.links.len() {
            return false;
        }
        self.links.remove(index);
        true
    }

    pub fn update_link(&mut self, index: usize, field: LinkField, value: impl Into<String>) -> bool {
        match self.links.get_mut(index) {
            Some(link) => {
                match field {
                    LinkField::Title => link.title = value.into(),
                    LinkField::Url => link.url = value.into(),
                }
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> PublishSelection {
        match self.tier {
            PublishTier::Free => PublishSelection::Free,
            PublishTier::Featured => PublishSelection::Featured,
            PublishTier::ExtraLinks => PublishSelection::ExtraLinks(self.links.clone()),
        }
    }

    /// Merge the tier choice into the draft
    pub fn finalize(&self) -> FinalizedEvent {
        let event = FinalizedEvent::new(self.draft.clone(), self.selection());
        crate::invariants::assert_finalized_invariants(&event);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn selector() -> TierSelector {
        TierSelector::new(EventDraft {
            name: "Test Event".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            start_time: NaiveTime::from_hms_opt(19, 0, 0),
            end_time: NaiveTime::from_hms_opt(22, 0, 0),
            description: "desc".into(),
            ..EventDraft::default()
        })
    }

    #[test]
    fn test_defaults() {
        let selector = selector();
        assert_eq!(selector.tier(), PublishTier::Free);
        assert_eq!(selector.links(), &[ExtraLink::default()]);
        assert!(!selector.shows_links());
    }

    #[test]
    fn test_add_link_appends_one_blank() {
        let mut selector = selector();
        for expected in 2..=5 {
            selector.add_link();
            assert_eq!(selector.links().len(), expected);
            assert!(selector.links().last().unwrap().is_blank());
        }
    }

    #[test]
    fn test_remove_keeps_last_entry() {
        let mut selector = selector();
        assert!(!selector.remove_link(0));
        assert_eq!(selector.links().len(), 1);

        selector.add_link();
        selector.update_link(1, LinkField::Title, "Second");
        assert!(!selector.remove_link(7));
        assert!(selector.remove_link(0));
        assert_eq!(selector.links()[0].title, "Second");
        assert!(!selector.remove_link(0));
    }

    #[test]
    fn test_links_survive_tier_switches() {
        let mut selector = selector();
        selector.select_tier(PublishTier::ExtraLinks);
        selector.update_link(0, LinkField::Title, "Tickets");
        selector.update_link(0, LinkField::Url, "https://t.example.com");
        selector.add_link();

        selector.select_tier(PublishTier::Free);
        selector.select_tier(PublishTier::ExtraLinks);

        assert_eq!(selector.links().len(), 2);
        assert_eq!(selector.links()[0].title, "Tickets");
    }

    #[test]
    fn test_links_only_sent_with_extra_links_tier() {
        let mut selector = selector();
        selector.update_link(0, LinkField::Url, "https://x.example.com");

        selector.select_tier(PublishTier::Featured);
        let event = selector.finalize();
        assert!(event.featured);
        assert!(event.extra_links.is_empty());

        selector.select_tier(PublishTier::ExtraLinks);
        let event = selector.finalize();
        assert!(!event.featured);
        assert_eq!(event.extra_links.len(), 1);
    }

    #[test]
    fn test_blank_links_pass_through() {
        let mut selector = selector();
        selector.select_tier(PublishTier::ExtraLinks);
        selector.add_link();
        let event = selector.finalize();
        assert_eq!(event.extra_links.len(), 2);
        assert!(event.extra_links.iter().all(|l| l.is_blank()));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut selector = selector();
        assert!(!selector.update_link(3, LinkField::Title, "x"));
    }

    #[test]
    fn test_finalize_every_tier_keeps_invariants() {
        let mut selector = selector();
        selector.update_link(0, LinkField::Title, "Tickets");

        for tier in PublishTier::ALL.iter().copied() {
            selector.select_tier(tier);
            let event = selector.finalize();
            assert_eq!(event.publishing_type, tier);
            assert_eq!(event.featured, tier == PublishTier::Featured);
            assert_eq!(event.draft.name, "Test Event");
        }
    }

    #[test]
    fn test_finalize_incomplete_draft_does_not_panic() {
        let mut selector = TierSelector::new(EventDraft::new());
        selector.select_tier(PublishTier::ExtraLinks);
        let event = selector.finalize();
        assert_eq!(event.extra_links.len(), 1);
        assert!(event.draft.validate().is_err());
    }
}
