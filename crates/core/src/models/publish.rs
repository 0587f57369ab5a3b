//! Publishing tier and finalized event models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventDraft;

/// Promotion level applied to a published event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishTier {
    #[default]
    Free,
    Featured,
    ExtraLinks,
}

impl PublishTier {
    pub const ALL: &'static [PublishTier] =
        &[PublishTier::Free, PublishTier::Featured, PublishTier::ExtraLinks];

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishTier::Free => "free",
            PublishTier::Featured => "featured",
            PublishTier::ExtraLinks => "extraLinks",
        }
    }

    /// Translation key of the tier card title
    pub fn title_key(&self) -> &'static str {
        match self {
            PublishTier::Free => "publishOptions.freeTitle",
            PublishTier::Featured => "publishOptions.featuredTitle",
            PublishTier::ExtraLinks => "publishOptions.extraLinksTitle",
        }
    }
}

impl FromStr for PublishTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PublishTier::Free),
            "featured" => Ok(PublishTier::Featured),
            "extraLinks" | "extra-links" => Ok(PublishTier::ExtraLinks),
            other => Err(format!("unknown publishing tier '{}'", other)),
        }
    }
}

impl fmt::Display for PublishTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the extra-links package. Blank entries are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLink {
    pub title: String,
    pub url: String,
}

impl ExtraLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.url.trim().is_empty()
    }
}

/// The tier chosen on the publish page, with its tier-specific input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishSelection {
    Free,
    Featured,
    /// Always holds at least one entry
    ExtraLinks(Vec<ExtraLink>),
}

impl PublishSelection {
    pub fn tier(&self) -> PublishTier {
        match self {
            PublishSelection::Free => PublishTier::Free,
            PublishSelection::Featured => PublishTier::Featured,
            PublishSelection::ExtraLinks(_) => PublishTier::ExtraLinks,
        }
    }
}

/// Draft merged with its publish selection, ready for a publisher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedEvent {
    #[serde(flatten)]
    pub draft: EventDraft,
    pub publishing_type: PublishTier,
    pub extra_links: Vec<ExtraLink>,
    pub featured: bool,
}

impl FinalizedEvent {
    pub fn new(draft: EventDraft, selection: PublishSelection) -> Self {
        let publishing_type = selection.tier();
        let extra_links = match selection {
            PublishSelection::ExtraLinks(links) => links,
            PublishSelection::Free | PublishSelection::Featured => Vec::new(),
        };
        Self {
            draft,
            publishing_type,
            extra_links,
            featured: publishing_type == PublishTier::Featured,
        }
    }
}

/// Identifier assigned by the publisher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
