//! Catalog pages: home, listings and event details

use freelo_core::{catalog, CatalogEvent, LocaleConfig, Route};

/// Lines for a catalog page, or `None` when the route is not one. The
/// listing page narrows to `category` when one is given.
pub fn render(
    locale: &LocaleConfig,
    route: &Route,
    signed_in: bool,
    category: Option<&str>,
) -> Option<Vec<String>> {
    let lines = match route {
        Route::Home => home(locale, signed_in),
        Route::Events => listing(locale, category),
        Route::PrivateEvents => private(locale, signed_in),
        Route::EventDetails(id) => match catalog::find(id) {
            Some(event) => details(locale, event),
            None => vec![locale.t("notFound.title").to_string()],
        },
        _ => return None,
    };
    Some(lines)
}

fn home(locale: &LocaleConfig, signed_in: bool) -> Vec<String> {
    let mut lines = vec![
        heading(locale.t("hero.title")),
        locale.t("hero.description").to_string(),
        String::new(),
        heading(locale.t("upcoming.title")),
    ];
    lines.extend(catalog::public().take(3).map(|event| card(locale, event)));

    lines.push(String::new());
    lines.push(heading(locale.t("recent.title")));
    lines.extend(catalog::recent().map(|event| card(locale, event)));

    if !signed_in {
        lines.push(String::new());
        lines.push(heading(locale.t("membership.title")));
        lines.push(locale.t("membership.description").to_string());
    }
    lines
}

fn listing(locale: &LocaleConfig, category: Option<&str>) -> Vec<String> {
    let mut lines = vec![heading(locale.t("upcoming.title"))];
    match category {
        Some(category) => {
            lines.push(format!("{}: {}", locale.t("event.category"), category));
            lines.extend(
                catalog::with_category(category)
                    .filter(|event| !event.is_private)
                    .map(|event| card(locale, event)),
            );
        }
        None => lines.extend(catalog::public().map(|event| card(locale, event))),
    }
    lines
}

fn private(locale: &LocaleConfig, signed_in: bool) -> Vec<String> {
    let mut lines = vec![
        heading(locale.t("private.title")),
        locale.t("private.description").to_string(),
    ];
    if signed_in {
        lines.extend(catalog::private().map(|event| card(locale, event)));
    } else {
        lines.push(format!("-> {}", locale.t("private.join")));
    }
    lines
}

fn details(locale: &LocaleConfig, event: &CatalogEvent) -> Vec<String> {
    vec![
        heading(event.title),
        format!("{}: {}", locale.t("event.date"), event.date),
        format!("{}: {}", locale.t("event.time"), event.time),
        format!("{}: {}", locale.t("event.location"), event.location),
        event.categories.join(", "),
    ]
}

fn card(locale: &LocaleConfig, event: &CatalogEvent) -> String {
    let mut badges = String::new();
    if event.is_new {
        badges.push_str(&format!(" [{}]", locale.t("event.new")));
    }
    if event.is_private {
        badges.push_str(&format!(" [{}]", locale.t("event.private")));
    }
    format!(
        "  {} | {} {} | {} | /events/{}{}",
        event.title, event.date, event.time, event.location, event.id, badges
    )
}

fn heading(text: &str) -> String {
    format!("== {} ==", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelo_core::Locale;

    #[test]
    fn test_private_events_hidden_when_signed_out() {
        let locale = LocaleConfig::new(Locale::En);
        let signed_out = render(&locale, &Route::PrivateEvents, false, None).unwrap();
        let signed_in = render(&locale, &Route::PrivateEvents, true, None).unwrap();
        assert!(signed_out.iter().any(|l| l.contains("Join to Access")));
        assert_eq!(signed_in.len(), 2 + catalog::private().count());
    }

    #[test]
    fn test_details_and_missing_event() {
        let locale = LocaleConfig::new(Locale::En);
        let event = &catalog::all()[0];
        let lines = render(&locale, &Route::EventDetails(event.id.to_string()), false, None).unwrap();
        assert!(lines[0].contains(event.title));

        let missing = render(&locale, &Route::EventDetails("nope".into()), false, None).unwrap();
        assert_eq!(missing, vec!["Page not found".to_string()]);
    }

    #[test]
    fn test_non_catalog_route() {
        let locale = LocaleConfig::default();
        assert!(render(&locale, &Route::AddEvent, false, None).is_none());
    }

    #[test]
    fn test_listing_by_category_hides_private() {
        let locale = LocaleConfig::new(Locale::En);
        let lines = render(&locale, &Route::Events, true, Some("BDSM")).unwrap();
        let cards: Vec<_> = lines.iter().filter(|l| l.contains("/events/")).collect();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|l| !l.contains("[Private]")));

        let all = render(&locale, &Route::Events, false, None).unwrap();
        assert_eq!(all.len(), 1 + catalog::public().count());
    }
}
