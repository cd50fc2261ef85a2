//! Hardcoded demo catalog.
//!
//! The tracker has no persistence layer yet; the catalog ships as a fixed
//! in-process fixture, the way the original front-end carried its listing
//! data inline. The engine is agnostic to the source, so swapping this for
//! a datastore query later only changes where the Vec comes from.

use chrono::NaiveDate;

use super::models::Show;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Components are literals below; out-of-range would be a typo in the fixture.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// The demo show catalog, in display order.
pub fn demo_catalog() -> Vec<Show> {
    vec![
        Show {
            id: 1,
            title: "The Hollow Stage".to_string(),
            company: "Red Curtain Collective".to_string(),
            neighborhood: "Pilsen".to_string(),
            tag: "drama".to_string(),
            performances: vec![
                date(2026, 3, 6),
                date(2026, 3, 7),
                date(2026, 3, 13),
                date(2026, 3, 14),
            ],
            closing_date: date(2026, 3, 14),
            featured: true,
            closing: false,
        },
        Show {
            id: 2,
            title: "Bucktown Follies".to_string(),
            company: "Near North Players".to_string(),
            neighborhood: "Bucktown".to_string(),
            tag: "comedy".to_string(),
            performances: vec![date(2026, 3, 7), date(2026, 3, 8), date(2026, 3, 15)],
            closing_date: date(2026, 3, 15),
            featured: false,
            closing: true,
        },
        Show {
            id: 3,
            title: "Sixteen Scenes From a Basement".to_string(),
            company: "Storefront Lab".to_string(),
            neighborhood: "Andersonville".to_string(),
            tag: "devised".to_string(),
            performances: vec![date(2026, 3, 5), date(2026, 3, 6), date(2026, 3, 12)],
            closing_date: date(2026, 4, 2),
            featured: true,
            closing: false,
        },
        Show {
            id: 4,
            title: "El Tren de las 11".to_string(),
            company: "Teatro Callejero".to_string(),
            neighborhood: "Pilsen".to_string(),
            tag: "comedy".to_string(),
            performances: vec![date(2026, 3, 8), date(2026, 3, 14), date(2026, 3, 21)],
            closing_date: date(2026, 3, 21),
            featured: false,
            closing: false,
        },
        Show {
            id: 5,
            title: "Winter Counts".to_string(),
            company: "Howling Moon Theatre".to_string(),
            neighborhood: "Rogers Park".to_string(),
            tag: "drama".to_string(),
            performances: vec![date(2026, 3, 6), date(2026, 3, 7), date(2026, 3, 8)],
            closing_date: date(2026, 3, 8),
            featured: false,
            closing: true,
        },
        Show {
            id: 6,
            title: "An Evening of Small Disasters".to_string(),
            company: "Backroom Ensemble".to_string(),
            neighborhood: "Logan Square".to_string(),
            tag: "devised".to_string(),
            performances: vec![date(2026, 3, 13), date(2026, 3, 14), date(2026, 3, 20)],
            closing_date: date(2026, 4, 11),
            featured: false,
            closing: false,
        },
        Show {
            id: 7,
            title: "Dear Chicago, Love Us".to_string(),
            company: "Two Chairs and a Light".to_string(),
            neighborhood: "Logan Square".to_string(),
            tag: "comedy".to_string(),
            performances: vec![date(2026, 3, 7), date(2026, 3, 14), date(2026, 3, 28)],
            closing_date: date(2026, 3, 28),
            featured: true,
            closing: false,
        },
        Show {
            id: 8,
            title: "The Lake Effect".to_string(),
            company: "Red Curtain Collective".to_string(),
            neighborhood: "Rogers Park".to_string(),
            tag: "drama".to_string(),
            performances: vec![date(2026, 3, 12), date(2026, 3, 13)],
            closing_date: date(2026, 3, 13),
            featured: false,
            closing: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = demo_catalog();
        let ids: BTreeSet<i64> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        for show in demo_catalog() {
            assert!(!show.neighborhood.is_empty());
            assert!(!show.tag.is_empty());
            assert!(!show.performances.is_empty());
        }
    }
}
