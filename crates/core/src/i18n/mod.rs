//! Locale and translation lookup
//!
//! The active locale is an explicit `LocaleConfig` value handed to whatever
//! renders text. Switching language produces a new config; nothing here is
//! global.

mod en;
mod he;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::He];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::He => Direction::Rtl,
        }
    }

    /// The other locale, for the navbar toggle
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::He,
            Locale::He => Locale::En,
        }
    }

    fn table(&self) -> &'static HashMap<&'static str, &'static str> {
        static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        static HE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        match self {
            Locale::En => EN.get_or_init(|| en::STRINGS.iter().copied().collect()),
            Locale::He => HE.get_or_init(|| he::STRINGS.iter().copied().collect()),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "he" => Ok(Locale::He),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Document layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the document `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Key lookup for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized string for `key`, or the key itself when missing
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.locale.table().get(key).copied().unwrap_or(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.locale.table().contains_key(key)
    }
}

/// Locale settings threaded through the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locale: Locale,
    pub translator: Translator,
    pub direction: Direction,
}

impl LocaleConfig {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            translator: Translator::new(locale),
            direction: locale.direction(),
        }
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    pub fn switch_to(&self, locale: Locale) -> Self {
        Self::new(locale)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_and_fallback() {
        let en = Translator::new(Locale::En);
        assert_eq!(en.t("nav.events"), "Events");
        assert_eq!(en.t("does.not.exist"), "does.not.exist");

        let he = Translator::new(Locale::He);
        assert_eq!(he.t("nav.events"), "אירועים");
    }

    #[test]
    fn test_direction_flip() {
        let config = LocaleConfig::new(Locale::En);
        assert_eq!(config.direction, Direction::Ltr);

        let switched = config.switch_to(config.locale.toggled());
        assert_eq!(switched.locale, Locale::He);
        assert!(switched.direction.is_rtl());
        assert_eq!(switched.direction.as_str(), "rtl");
    }

    #[test]
    fn test_tables_share_keys() {
        let en: HashSet<_> = en::STRINGS.iter().map(|(k, _)| *k).collect();
        let he: HashSet<_> = he::STRINGS.iter().map(|(k, _)| *k).collect();
        let missing_he: Vec<_> = en.difference(&he).collect();
        let missing_en: Vec<_> = he.difference(&en).collect();
        assert!(missing_he.is_empty(), "missing in he: {:?}", missing_he);
        assert!(missing_en.is_empty(), "missing in en: {:?}", missing_en);
        assert_eq!(en.len(), en::STRINGS.len(), "duplicate keys in en");
    }

    #[test]
    fn test_choice_labels_are_translated() {
        use crate::models::{AttendeeType, EventCategory, LocationType};

        for locale in Locale::ALL {
            let t = Translator::new(*locale);
            for c in EventCategory::ALL {
                assert!(t.has(c.label_key()), "{} lacks {}", locale, c.label_key());
            }
            for l in LocationType::ALL {
                assert!(t.has(l.label_key()));
            }
            for a in AttendeeType::ALL {
                assert!(t.has(a.label_key()));
            }
        }
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("HE".parse::<Locale>(), Ok(Locale::He));
        assert!("fr".parse::<Locale>().is_err());
    }
}
