//! Event draft model
//!
//! An `EventDraft` is the unpersisted event being authored in the composer.
//! Choice fields carry the same string values the add-event form submits,
//! so a serialized draft reads the same in every front-end.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ImagePreview;
use crate::error::DraftError;

/// Declares a form choice enum with its wire value and translation key.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($value:literal, $key:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $value)] $variant),+
        }

        impl $name {
            /// Every option, in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value submitted by the form
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Translation key for the option label
            pub fn label_key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Event category. Single-select: picking one replaces the previous pick.
    pub enum EventCategory {
        Fetish => ("fetish", "eventType.fetish"),
        Swingers => ("swingers", "eventType.swingers"),
        Orgy => ("orgy", "eventType.orgy"),
        Lifestyle => ("lifestyle", "eventType.lifestyle"),
        Private => ("private", "eventType.private"),
        Bdsm => ("bdsm", "eventType.bdsm"),
        Couples => ("couples", "eventType.couples"),
        Mixed => ("mixed", "eventType.mixed"),
        Other => ("other", "common.other"),
    }
}

choice_enum! {
    /// Kind of venue
    #[derive(Default)]
    pub enum LocationType {
        #[default]
        Club => ("club", "locationType.club"),
        PrivateHome => ("privateHome", "locationType.privateHome"),
        Outdoors => ("outdoors", "locationType.outdoors"),
        Bar => ("bar", "locationType.bar"),
        Hotel => ("hotel", "locationType.hotel"),
        PublicSpace => ("publicSpace", "locationType.publicSpace"),
        Other => ("other", "common.other"),
    }
}

choice_enum! {
    /// Maximum number of attendees
    #[derive(Default)]
    pub enum AttendeeLimit {
        #[default]
        Ten => ("10", "attendeeLimit.10"),
        Twenty => ("20", "attendeeLimit.20"),
        Thirty => ("30", "attendeeLimit.30"),
        Forty => ("40", "attendeeLimit.40"),
        Fifty => ("50", "attendeeLimit.50"),
        Hundred => ("100", "attendeeLimit.100"),
        Unlimited => ("unlimited", "attendeeLimit.unlimited"),
        Other => ("other", "common.other"),
    }
}

choice_enum! {
    /// How attendees get in
    #[derive(Default)]
    pub enum AccessMode {
        #[default]
        Free => ("free", "accessMode.free"),
        Registration => ("registration", "accessMode.registration"),
        Other => ("other", "common.other"),
    }
}

choice_enum! {
    /// What the event includes (multi-select)
    pub enum EventFeature {
        GenderMix => ("gender-mix", "eventHas.genderMix"),
        Bdsm => ("bdsm", "eventHas.bdsm"),
        NoSexual => ("no-sexual", "eventHas.noSexual"),
        PublicMix => ("public-mix", "eventHas.publicMix"),
    }
}

choice_enum! {
    /// Who may attend (multi-select)
    pub enum AttendeeType {
        All => ("all", "attendeeType.all"),
        Verified => ("verified", "attendeeType.verified"),
        MenOnly => ("men-only", "attendeeType.menOnly"),
        WomenOnly => ("women-only", "attendeeType.womenOnly"),
        CouplesOnly => ("couples-only", "attendeeType.couplesOnly"),
        Invitation => ("invitation", "attendeeType.invitation"),
        Lgbtq => ("lgbtq", "attendeeType.lgbtq"),
        Other => ("other", "common.other"),
    }
}

choice_enum! {
    /// Attendee age range
    #[derive(Default)]
    pub enum AgeRange {
        #[default]
        NoLimit => ("no-limit", "ageRange.noLimit"),
        From25To45 => ("25-45", "ageRange.25to45"),
        From30To50 => ("30-50", "ageRange.30to50"),
        Other => ("other", "common.other"),
    }
}

/// Fields that must be filled before the draft can leave the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Date,
    StartTime,
    EndTime,
    Description,
}

impl DraftField {
    pub const REQUIRED: &'static [DraftField] = &[
        DraftField::Name,
        DraftField::Date,
        DraftField::StartTime,
        DraftField::EndTime,
        DraftField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Date => "date",
            DraftField::StartTime => "startTime",
            DraftField::EndTime => "endTime",
            DraftField::Description => "description",
        }
    }

    /// Translation key of the form label
    pub fn label_key(&self) -> &'static str {
        match self {
            DraftField::Name => "addEvent.name",
            DraftField::Date => "addEvent.date",
            DraftField::StartTime => "addEvent.startTime",
            DraftField::EndTime => "addEvent.endTime",
            DraftField::Description => "addEvent.descriptionField",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event under construction, not yet finalized or persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub name: String,
    /// Display name of the organizer, if different from the account
    pub host: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub event_category: Option<EventCategory>,
    pub location_type: LocationType,
    pub address: String,
    pub description: String,
    pub attendee_limit: AttendeeLimit,
    pub access_mode: AccessMode,
    pub event_has: BTreeSet<EventFeature>,
    pub attendee_type: BTreeSet<AttendeeType>,
    pub age_range: AgeRange,
    pub ticket_link: Option<String>,
    pub carticket_required: bool,
    /// Local preview only; never serialized or uploaded
    #[serde(skip)]
    pub image: Option<ImagePreview>,
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required fields that are still empty, in form order
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .iter()
            .copied()
            .filter(|field| match field {
                DraftField::Name => self.name.trim().is_empty(),
                DraftField::Date => self.date.is_none(),
                DraftField::StartTime => self.start_time.is_none(),
                DraftField::EndTime => self.end_time.is_none(),
                DraftField::Description => self.description.trim().is_empty(),
            })
            .collect()
    }

    /// A draft may leave the composer only when every required field is filled
    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }
}
