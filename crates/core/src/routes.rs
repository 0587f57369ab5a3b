//! Path-based routing
//!
//! Maps site paths to pages. Anything unrecognised lands on `NotFound`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    EventDetails(String),
    PrivateEvents,
    Saved,
    Auth,
    AddEvent,
    PublishOptions,
    Profile,
    AccountSettings,
    Membership,
    Tickets,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["events"] => Route::Events,
            ["events", id] if !id.is_empty() => Route::EventDetails((*id).to_string()),
            ["private-events"] => Route::PrivateEvents,
            ["saved"] => Route::Saved,
            ["auth"] => Route::Auth,
            ["add-event"] => Route::AddEvent,
            ["publish-options"] => Route::PublishOptions,
            ["profile"] => Route::Profile,
            ["account-settings"] => Route::AccountSettings,
            ["membership"] => Route::Membership,
            ["tickets"] => Route::Tickets,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetails(id) => format!("/events/{}", id),
            Route::PrivateEvents => "/private-events".to_string(),
            Route::Saved => "/saved".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::AddEvent => "/add-event".to_string(),
            Route::PublishOptions => "/publish-options".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::AccountSettings => "/account-settings".to_string(),
            Route::Membership => "/membership".to_string(),
            Route::Tickets => "/tickets".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Pages that redirect to `/auth` without a session
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Profile | Route::AccountSettings)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Events,
            Route::EventDetails("12".into()),
            Route::PrivateEvents,
            Route::Saved,
            Route::Auth,
            Route::AddEvent,
            Route::PublishOptions,
            Route::Profile,
            Route::AccountSettings,
            Route::Membership,
            Route::Tickets,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
        assert_eq!(
            Route::parse("/events/1/extra"),
            Route::NotFound("/events/1/extra".into())
        );
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::parse("/add-event/"), Route::AddEvent);
        assert_eq!(Route::parse("/events?page=2"), Route::Events);
        assert_eq!(Route::parse(""), Route::Home);
    }
}
