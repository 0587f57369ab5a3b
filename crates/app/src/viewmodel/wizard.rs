//! Add-event and publish-options view model

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use freelo_core::{
    AccessMode, AgeRange, AttendeeLimit, AttendeeType, DraftComposer, Error, EventCategory,
    EventFeature, ImagePreview, LinkField, LocaleConfig, LocationType, PublishOutcome,
    PublishTier, Stage, TierSelector,
};
use tracing::warn;

use super::{Notification, Response};
use crate::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const PREVIEW_CHARS: usize = 48;

/// Set one composer field from its form name
pub fn set_field(state: &mut AppState, field: &str, value: &str) -> Response {
    let locale = *state.locale();
    let Some(composer) = state.wizard_mut().composer_mut() else {
        return not_available(&locale);
    };

    match apply_field(composer, field, value.trim()) {
        Ok(()) => Response::none(),
        Err(detail) => {
            Response::notify(Notification::error(&locale, "common.invalidValue").with_detail(detail))
        }
    }
}

fn apply_field(composer: &mut DraftComposer, field: &str, value: &str) -> Result<(), String> {
    match field {
        "name" => composer.set_name(value),
        "host" => composer.set_host(value),
        "date" => composer.set_date(parse_optional(value, |v| {
            NaiveDate::parse_from_str(v, DATE_FORMAT)
        })?),
        "start" | "startTime" => composer.set_start_time(parse_optional(value, |v| {
            NaiveTime::parse_from_str(v, TIME_FORMAT)
        })?),
        "end" | "endTime" => composer.set_end_time(parse_optional(value, |v| {
            NaiveTime::parse_from_str(v, TIME_FORMAT)
        })?),
        "category" | "eventCategory" => {
            if value.is_empty() {
                composer.clear_category();
            } else {
                composer.select_category(value.parse::<EventCategory>()?);
            }
        }
        "location" | "locationType" => composer.set_location_type(value.parse::<LocationType>()?),
        "address" => composer.set_address(value),
        "description" => composer.set_description(value),
        "limit" | "attendeeLimit" => composer.set_attendee_limit(value.parse::<AttendeeLimit>()?),
        "access" | "accessMode" => composer.set_access_mode(value.parse::<AccessMode>()?),
        "age" | "ageRange" => composer.set_age_range(value.parse::<AgeRange>()?),
        "ticket" | "ticketLink" => composer.set_ticket_link(value),
        "image" => {
            if value.is_empty() {
                composer.remove_image();
            } else {
                let image = ImagePreview::from_path(Path::new(value)).map_err(|e| e.to_string())?;
                composer.attach_image(image);
            }
        }
        other => return Err(format!("unknown field '{}'", other)),
    }
    Ok(())
}

fn parse_optional<T, E: std::fmt::Display>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Option<T>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).map_err(|e| format!("'{}': {}", value, e))
}

/// Flip a checkbox: `has <feature>`, `attendee <type>` or `carticket`
pub fn toggle(state: &mut AppState, group: &str, value: Option<&str>) -> Response {
    let locale = *state.locale();
    let Some(composer) = state.wizard_mut().composer_mut() else {
        return not_available(&locale);
    };

    let result = match (group, value) {
        ("has", Some(v)) => v.parse::<EventFeature>().map(|feature| {
            let checked = !composer.draft().event_has.contains(&feature);
            composer.set_event_has(feature, checked);
        }),
        ("attendee", Some(v)) => v.parse::<AttendeeType>().map(|attendee| {
            let checked = !composer.draft().attendee_type.contains(&attendee);
            composer.set_attendee_type(attendee, checked);
        }),
        ("carticket", _) => {
            let required = !composer.draft().carticket_required;
            composer.set_carticket_required(required);
            Ok(())
        }
        (other, _) => Err(format!("unknown checkbox '{}'", other)),
    };

    match result {
        Ok(()) => Response::none(),
        Err(detail) => {
            Response::notify(Notification::error(&locale, "common.invalidValue").with_detail(detail))
        }
    }
}

/// Validate and hand the draft to the publish page
pub fn submit(state: &mut AppState) -> Response {
    let locale = *state.locale();
    match state.wizard_mut().submit_draft() {
        Ok(route) => {
            Response::notify(Notification::success(&locale, "addEvent.success")).and_goto(route)
        }
        Err(Error::Draft(e)) => {
            let fields = e
                .missing_fields()
                .iter()
                .map(|f| locale.t(f.label_key()))
                .collect::<Vec<_>>()
                .join(", ");
            Response::notify(Notification::error(&locale, "addEvent.required").with_detail(fields))
        }
        Err(Error::InvalidOperation(_)) => not_available(&locale),
        Err(e) => Response::notify(Notification::error(&locale, "common.error").with_detail(e)),
    }
}

pub fn select_tier(state: &mut AppState, tier: &str) -> Response {
    let locale = *state.locale();
    let tier = match tier.parse::<PublishTier>() {
        Ok(tier) => tier,
        Err(e) => {
            return Response::notify(
                Notification::error(&locale, "common.invalidValue").with_detail(e),
            )
        }
    };
    with_selector(state, |selector| {
        selector.select_tier(tier);
        Ok(())
    })
}

pub fn add_link(state: &mut AppState) -> Response {
    with_selector(state, |selector| {
        selector.add_link();
        Ok(())
    })
}

/// Remove the entry at a zero-based index
pub fn remove_link(state: &mut AppState, index: usize) -> Response {
    with_selector(state, |selector| {
        if selector.remove_link(index) {
            Ok(())
        } else {
            Err(format!("cannot remove link {}", index + 1))
        }
    })
}

pub fn set_link(state: &mut AppState, index: usize, field: LinkField, value: &str) -> Response {
    with_selector(state, |selector| {
        if selector.update_link(index, field, value) {
            Ok(())
        } else {
            Err(format!("no link {}", index + 1))
        }
    })
}

fn with_selector(
    state: &mut AppState,
    f: impl FnOnce(&mut TierSelector) -> Result<(), String>,
) -> Response {
    let locale = *state.locale();
    let Some(selector) = state.wizard_mut().selector_mut() else {
        return not_available(&locale);
    };
    match f(selector) {
        Ok(()) => Response::none(),
        Err(detail) => {
            Response::notify(Notification::error(&locale, "common.invalidValue").with_detail(detail))
        }
    }
}

/// Back to the composer with the stored draft
pub fn back(state: &mut AppState) -> Response {
    let locale = *state.locale();
    match state.wizard_mut().back() {
        Ok(route) => Response::goto(route),
        Err(Error::InvalidOperation(_)) => not_available(&locale),
        Err(e) => Response::notify(Notification::error(&locale, "common.error").with_detail(e)),
    }
}

/// Publish the stored draft with the selected tier
pub async fn confirm(state: &mut AppState) -> Response {
    let locale = *state.locale();
    match state.wizard_mut().confirm().await {
        Ok(outcome @ PublishOutcome::Published { .. }) => {
            Response::notify(Notification::success(&locale, "publishOptions.success"))
                .and_goto(outcome.route())
        }
        Ok(PublishOutcome::Failed(e)) => {
            warn!(error = %e, "Publish failed");
            Response::notify(Notification::error(&locale, "publishOptions.error"))
        }
        Err(Error::InvalidOperation(_)) => not_available(&locale),
        Err(e) => Response::notify(Notification::error(&locale, "common.error").with_detail(e)),
    }
}

fn not_available(locale: &LocaleConfig) -> Response {
    Response::notify(Notification::error(locale, "common.notAvailable"))
}

/// Lines for the add-event or publish-options page
pub fn render(state: &AppState) -> Vec<String> {
    let locale = state.locale();
    match state.wizard().stage() {
        Stage::Composing(composer) => render_composer(locale, composer),
        Stage::Selecting(selector) => render_selector(locale, selector),
        Stage::Published(id) => vec![format!("{} ({})", locale.t("publishOptions.success"), id)],
    }
}

fn render_composer(locale: &LocaleConfig, composer: &DraftComposer) -> Vec<String> {
    let draft = composer.draft();
    let missing = draft.missing_required();
    let mark = |field| if missing.contains(&field) { " *" } else { "" };
    let fmt_opt = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    use freelo_core::DraftField as F;
    let mut lines = vec![
        format!("== {} ==", locale.t("addEvent.title")),
        locale.t("addEvent.description").to_string(),
        format!("{}{}: {}", locale.t("addEvent.name"), mark(F::Name), draft.name),
        format!("{}: {}", locale.t("addEvent.host"), draft.host),
        format!(
            "{}{}: {}",
            locale.t("addEvent.date"),
            mark(F::Date),
            fmt_opt(draft.date.map(|d| d.format(DATE_FORMAT).to_string()))
        ),
        format!(
            "{}{}: {}",
            locale.t("addEvent.startTime"),
            mark(F::StartTime),
            fmt_opt(draft.start_time.map(|t| t.format(TIME_FORMAT).to_string()))
        ),
        format!(
            "{}{}: {}",
            locale.t("addEvent.endTime"),
            mark(F::EndTime),
            fmt_opt(draft.end_time.map(|t| t.format(TIME_FORMAT).to_string()))
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.type"),
            fmt_opt(draft.event_category.map(|c| locale.t(c.label_key()).to_string()))
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.locationType"),
            locale.t(draft.location_type.label_key())
        ),
        format!("{}: {}", locale.t("addEvent.address"), draft.address),
        format!(
            "{}{}: {}",
            locale.t("addEvent.descriptionField"),
            mark(F::Description),
            draft.description
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.attendeeLimit"),
            locale.t(draft.attendee_limit.label_key())
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.accessMode"),
            locale.t(draft.access_mode.label_key())
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.eventHas"),
            checkboxes(locale, EventFeature::ALL, |f| draft.event_has.contains(f), |f| f.label_key())
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.attendeeType"),
            checkboxes(locale, AttendeeType::ALL, |a| draft.attendee_type.contains(a), |a| a.label_key())
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.ageRange"),
            locale.t(draft.age_range.label_key())
        ),
        format!(
            "{}: {}",
            locale.t("addEvent.ticketLink"),
            fmt_opt(draft.ticket_link.clone())
        ),
    ];
    if let Some(image) = &draft.image {
        lines.push(format!(
            "{}: {} ({}, {} bytes)",
            locale.t("addEvent.image"),
            image.file_name,
            image.mime_type,
            image.size()
        ));
        lines.push(format!("  {}", preview(&image.data_url())));
    }
    lines.push(format!("-> {}", locale.t("addEvent.submit")));
    lines
}

/// Head of a data URL, enough to show what the preview holds
fn preview(url: &str) -> String {
    match url.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.to_string(),
    }
}

fn checkboxes<T>(
    locale: &LocaleConfig,
    options: &[T],
    checked: impl Fn(&T) -> bool,
    label: impl Fn(&T) -> &'static str,
) -> String {
    options
        .iter()
        .map(|option| {
            let mark = if checked(option) { "x" } else { " " };
            format!("[{}] {}", mark, locale.t(label(option)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_selector(locale: &LocaleConfig, selector: &TierSelector) -> Vec<String> {
    let mut lines = vec![
        format!("== {} ==", locale.t("publishOptions.title")),
        format!("{} - {}", selector.draft().name, locale.t("publishOptions.description")),
    ];

    for tier in PublishTier::ALL {
        let price = match tier {
            PublishTier::Free => "publishOptions.free",
            PublishTier::Featured => "publishOptions.featuredPrice",
            PublishTier::ExtraLinks => "publishOptions.extraLinksPrice",
        };
        let mark = if *tier == selector.tier() { "(o)" } else { "( )" };
        lines.push(format!(
            "{} {} - {} [{}]",
            mark,
            locale.t(tier.title_key()),
            locale.t(price),
            tier
        ));
    }

    if selector.shows_links() {
        lines.push(locale.t("publishOptions.addExtraLinks").to_string());
        for (i, link) in selector.links().iter().enumerate() {
            lines.push(format!(
                "  {}. {}: {} | {}: {}",
                i + 1,
                locale.t("publishOptions.linkTitle"),
                link.title,
                locale.t("publishOptions.linkUrl"),
                link.url
            ));
        }
    }

    lines.push(format!(
        "<- {}   -> {}",
        locale.t("publishOptions.back"),
        locale.t("publishOptions.publish")
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::{AppConfig, Route};

    fn state() -> AppState {
        let mut config = AppConfig::default();
        config.publish.delay_ms = 0;
        AppState::in_memory(config).unwrap()
    }

    fn fill(state: &mut AppState) {
        for (field, value) in [
            ("name", "Test Event"),
            ("date", "2024-01-01"),
            ("start", "19:00"),
            ("end", "22:00"),
            ("description", "desc"),
        ] {
            assert_eq!(set_field(state, field, value), Response::none());
        }
    }

    #[test]
    fn test_submit_reports_missing_fields() {
        let mut state = state();
        set_field(&mut state, "name", "Only a name");

        let response = submit(&mut state);
        let note = response.notification.unwrap();
        assert!(note.is_error());
        assert!(note.message.starts_with("Please fill in all required fields"));
        assert!(note.message.contains("Description"));
        assert!(!note.message.contains("Event Name"));
        assert_eq!(response.route, None);
        assert_eq!(state.wizard().route(), Route::AddEvent);
    }

    #[test]
    fn test_bad_values_rejected() {
        let mut state = state();
        assert!(set_field(&mut state, "date", "tomorrow").notification.unwrap().is_error());
        assert!(set_field(&mut state, "category", "nope").notification.unwrap().is_error());
        assert!(set_field(&mut state, "colour", "red").notification.unwrap().is_error());
        assert!(toggle(&mut state, "has", Some("cake")).notification.unwrap().is_error());
    }

    #[test]
    fn test_category_is_single_select() {
        let mut state = state();
        set_field(&mut state, "category", "fetish");
        set_field(&mut state, "category", "bdsm");
        let draft = state.wizard().composer().unwrap().draft();
        assert_eq!(draft.event_category, Some(EventCategory::Bdsm));
    }

    #[test]
    fn test_toggles_flip() {
        let mut state = state();
        toggle(&mut state, "has", Some("bdsm"));
        toggle(&mut state, "attendee", Some("couples-only"));
        toggle(&mut state, "carticket", None);
        toggle(&mut state, "has", Some("bdsm"));

        let draft = state.wizard().composer().unwrap().draft();
        assert!(draft.event_has.is_empty());
        assert!(draft.attendee_type.contains(&AttendeeType::CouplesOnly));
        assert!(draft.carticket_required);
    }

    #[tokio::test]
    async fn test_extra_links_flow() {
        let mut state = state();
        fill(&mut state);

        let response = submit(&mut state);
        assert_eq!(response.route, Some(Route::PublishOptions));

        select_tier(&mut state, "extraLinks");
        set_link(&mut state, 0, LinkField::Title, "Tickets");
        set_link(&mut state, 0, LinkField::Url, "https://t.example");
        add_link(&mut state);
        assert!(render(&state).iter().any(|l| l.contains("Tickets")));
        assert!(remove_link(&mut state, 1).notification.is_none());
        assert!(remove_link(&mut state, 0).notification.unwrap().is_error());

        let response = confirm(&mut state).await;
        assert_eq!(response.route, Some(Route::Events));
        assert!(!response.notification.unwrap().is_error());
    }

    #[tokio::test]
    async fn test_selector_actions_need_publish_page() {
        let mut state = state();
        assert!(select_tier(&mut state, "featured").notification.unwrap().is_error());
        assert!(back(&mut state).notification.unwrap().is_error());
        assert!(confirm(&mut state).await.notification.unwrap().is_error());
    }

    #[test]
    fn test_render_marks_missing_fields() {
        let state = state();
        let lines = render(&state);
        assert!(lines.iter().any(|l| l.starts_with("Event Name *")));
        assert!(lines.iter().any(|l| l.starts_with("Host:")));
    }

    #[test]
    fn test_render_shows_image_preview() {
        let mut state = state();
        let image = ImagePreview::from_bytes("flyer.png", vec![7; 300]).unwrap();
        state.wizard_mut().composer_mut().unwrap().attach_image(image);

        let lines = render(&state);
        let url = lines
            .iter()
            .find(|l| l.trim_start().starts_with("data:image/png;base64,"))
            .unwrap();
        assert!(url.ends_with("..."));
        assert_eq!(url.trim().len(), PREVIEW_CHARS + 3);
        assert!(lines.iter().any(|l| l.contains("flyer.png (image/png, 300 bytes)")));
    }
}
