//! View models for the terminal front-end
//!
//! Each handler takes the application state, performs one user action and
//! returns a `Response`: an optional notification plus an optional page to
//! navigate to.

pub mod auth;
pub mod events;
pub mod language;
pub mod wizard;

use std::fmt;

use freelo_core::{LocaleConfig, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Transient message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn localized(level: NotificationLevel, locale: &LocaleConfig, key: &str) -> Self {
        Self {
            level,
            message: locale.t(key).to_string(),
        }
    }

    pub fn info(locale: &LocaleConfig, key: &str) -> Self {
        Self::localized(NotificationLevel::Info, locale, key)
    }

    pub fn success(locale: &LocaleConfig, key: &str) -> Self {
        Self::localized(NotificationLevel::Success, locale, key)
    }

    pub fn error(locale: &LocaleConfig, key: &str) -> Self {
        Self::localized(NotificationLevel::Error, locale, key)
    }

    /// Append untranslated detail, such as an error message
    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.message = format!("{} ({})", self.message, detail);
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NotificationLevel::Info => "*",
            NotificationLevel::Success => "+",
            NotificationLevel::Error => "!",
        };
        write!(f, "[{}] {}", marker, self.message)
    }
}

/// Outcome of a view model action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub notification: Option<Notification>,
    pub route: Option<Route>,
}

impl Response {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            route: None,
        }
    }

    pub fn goto(route: Route) -> Self {
        Self {
            notification: None,
            route: Some(route),
        }
    }

    pub fn and_goto(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::Locale;

    #[test]
    fn test_notification_is_localized() {
        let en = LocaleConfig::new(Locale::En);
        let he = LocaleConfig::new(Locale::He);

        assert_eq!(Notification::success(&en, "logout.success").message, "Signed out");
        assert_ne!(Notification::success(&he, "logout.success").message, "Signed out");

        let err = Notification::error(&en, "common.error").with_detail("disk full");
        assert!(err.is_error());
        assert_eq!(err.to_string(), "[!] Something went wrong (disk full)");
    }
}
