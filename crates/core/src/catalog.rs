//! Static event catalog
//!
//! Read-only listing data for the home, listing and detail pages. Publishing
//! from the wizard does not add to it.

use crate::models::CatalogEvent;

const fn event(
    id: &'static str,
    title: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    image_url: &'static str,
    categories: &'static [&'static str],
) -> CatalogEvent {
    CatalogEvent {
        id,
        title,
        date,
        time,
        location,
        image_url,
        categories,
        is_private: false,
        is_new: false,
    }
}

const fn members_only(mut e: CatalogEvent) -> CatalogEvent {
    e.is_private = true;
    e
}

const fn recently_added(mut e: CatalogEvent) -> CatalogEvent {
    e.is_new = true;
    e
}

static EVENTS: &[CatalogEvent] = &[
    event(
        "1",
        "Polyamory Meetup & Workshop",
        "2023-07-25",
        "19:00 - 22:00",
        "Tel Aviv, Israel",
        "https://images.unsplash.com/photo-1556761175-b413da4baf72?q=80&w=500",
        &["Workshop", "Social"],
    ),
    event(
        "2",
        "Alternative Relationships Discussion Group",
        "2023-07-28",
        "20:00 - 23:00",
        "Jerusalem, Israel",
        "https://images.unsplash.com/photo-1532635241-17e820acc59f?q=80&w=500",
        &["Discussion", "Social"],
    ),
    event(
        "3",
        "BDSM Introduction Workshop",
        "2023-08-05",
        "19:30 - 23:00",
        "Haifa, Israel",
        "https://images.unsplash.com/photo-1528495612343-9ca9f4a4de28?q=80&w=500",
        &["Workshop", "Education"],
    ),
    members_only(event(
        "4",
        "Exclusive Swinger Party",
        "2023-08-12",
        "21:00 - 03:00",
        "Tel Aviv, Israel",
        "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?q=80&w=500",
        &["Party", "Swingers"],
    )),
    members_only(event(
        "5",
        "Private ENM Social Gathering",
        "2023-08-15",
        "20:00 - 00:00",
        "Jerusalem, Israel",
        "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?q=80&w=500",
        &["Social", "ENM"],
    )),
    members_only(event(
        "6",
        "BDSM Play Party",
        "2023-08-19",
        "22:00 - 04:00",
        "Haifa, Israel",
        "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?q=80&w=500",
        &["Play Party", "BDSM"],
    )),
    recently_added(event(
        "7",
        "ENM Communication Workshop",
        "2023-08-22",
        "19:00 - 21:30",
        "Tel Aviv, Israel",
        "https://images.unsplash.com/photo-1507878866276-a947ef722fee?q=80&w=500",
        &["Workshop", "ENM"],
    )),
    recently_added(event(
        "8",
        "Rope Bondage for Beginners",
        "2023-08-25",
        "19:30 - 22:00",
        "Jerusalem, Israel",
        "https://images.unsplash.com/photo-1557804506-669a67965ba0?q=80&w=500",
        &["Workshop", "BDSM"],
    )),
    recently_added(event(
        "9",
        "Polyamory Support Group",
        "2023-08-27",
        "18:00 - 20:00",
        "Online",
        "https://images.unsplash.com/photo-1543269865-cbf427effbad?q=80&w=500",
        &["Support Group", "Polyamory"],
    )),
    event(
        "10",
        "Swinger Couples Meetup",
        "2023-09-02",
        "20:00 - 00:00",
        "Tel Aviv, Israel",
        "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?q=80&w=500",
        &["Social", "Swingers"],
    ),
    event(
        "11",
        "Non-Monogamy Panel Discussion",
        "2023-09-07",
        "19:00 - 21:00",
        "Jerusalem, Israel",
        "https://images.unsplash.com/photo-1491438590914-bc09fcaaf77a?q=80&w=500",
        &["Discussion", "ENM"],
    ),
    event(
        "12",
        "Kink & Consent Workshop",
        "2023-09-12",
        "19:30 - 22:30",
        "Haifa, Israel",
        "https://images.unsplash.com/photo-1503428593586-e225b39bddfe?q=80&w=500",
        &["Workshop", "BDSM"],
    ),
    members_only(event(
        "13",
        "Couples Only Retreat",
        "2023-09-15",
        "18:00 - 23:00",
        "Dead Sea, Israel",
        "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?q=80&w=500",
        &["Retreat", "Couples"],
    )),
    members_only(event(
        "14",
        "Fetish Night",
        "2023-09-20",
        "22:00 - 04:00",
        "Tel Aviv, Israel",
        "https://images.unsplash.com/photo-1491933382434-500287f9b54b?q=80&w=500",
        &["Party", "BDSM"],
    )),
    members_only(event(
        "15",
        "Polyamory Weekend Getaway",
        "2023-09-22",
        "All Weekend",
        "Galilee, Israel",
        "https://images.unsplash.com/photo-1452421822248-d4c2b47f0c81?q=80&w=500",
        &["Retreat", "Polyamory"],
    )),
];

/// Every catalog entry, public and private, in date order
pub fn all() -> &'static [CatalogEvent] {
    EVENTS
}

pub fn public() -> impl Iterator<Item = &'static CatalogEvent> {
    EVENTS.iter().filter(|e| !e.is_private)
}

/// Members-only listings
pub fn private() -> impl Iterator<Item = &'static CatalogEvent> {
    EVENTS.iter().filter(|e| e.is_private)
}

/// Recently added listings
pub fn recent() -> impl Iterator<Item = &'static CatalogEvent> {
    EVENTS.iter().filter(|e| e.is_new)
}

pub fn find(id: &str) -> Option<&'static CatalogEvent> {
    EVENTS.iter().find(|e| e.id == id)
}

/// Listings tagged with `category`, ignoring case
pub fn with_category<'a>(category: &'a str) -> impl Iterator<Item = &'static CatalogEvent> + 'a {
    EVENTS.iter().filter(move |e| e.has_category(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_and_private_partition() {
        let public_count = public().count();
        let private_count = private().count();
        assert_eq!(public_count + private_count, all().len());
        assert_eq!(private_count, 6);
    }

    #[test]
    fn test_find() {
        let event = find("8").unwrap();
        assert_eq!(event.title, "Rope Bondage for Beginners");
        assert!(event.is_new);
        assert!(find("999").is_none());
    }

    #[test]
    fn test_dates_parse_and_are_ordered() {
        let dates: Vec<_> = all().iter().map(|e| e.parsed_date().unwrap()).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_category_filter_ignores_case() {
        assert_eq!(with_category("bdsm").count(), 4);
        assert_eq!(recent().count(), 3);
    }
}
