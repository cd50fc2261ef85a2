//! Engine-level tests over the shipped demo catalog.

use chrono::NaiveDate;
use tracker_core::domains::catalog::{
    compute_visible_shows, data::demo_catalog, derive_facets, select_views, DateWindow,
    DeviceClass, FilterState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(shows: &[tracker_core::domains::catalog::Show]) -> Vec<i64> {
    shows.iter().map(|s| s.id).collect()
}

#[test]
fn today_window_over_demo_catalog() {
    // 2026-03-06: shows 1, 3, and 5 perform that night.
    let catalog = demo_catalog();
    let state = FilterState {
        window: DateWindow::Today,
        ..Default::default()
    };

    let filtered = compute_visible_shows(&catalog, &state, date(2026, 3, 6));
    assert_eq!(ids(&filtered), vec![1, 3, 5]);
}

#[test]
fn weekend_window_from_a_wednesday() {
    // Wednesday 2026-03-04: the window is Sat 03-07 / Sun 03-08.
    let catalog = demo_catalog();
    let state = FilterState {
        window: DateWindow::ThisWeekend,
        ..Default::default()
    };

    let filtered = compute_visible_shows(&catalog, &state, date(2026, 3, 4));
    assert_eq!(ids(&filtered), vec![1, 2, 4, 5, 7]);
}

#[test]
fn weekend_window_from_saturday_is_next_weekend() {
    // Saturday 2026-03-07 anchors to 03-14/03-15, so the Sunday-only and
    // one-weekend shows drop out.
    let catalog = demo_catalog();
    let state = FilterState {
        window: DateWindow::ThisWeekend,
        ..Default::default()
    };

    let filtered = compute_visible_shows(&catalog, &state, date(2026, 3, 7));
    assert_eq!(ids(&filtered), vec![1, 2, 4, 6, 7]);
}

#[test]
fn pilsen_selection_regardless_of_tag() {
    let catalog = demo_catalog();
    let mut state = FilterState::default();
    state.toggle_neighborhood("Pilsen");

    let filtered = compute_visible_shows(&catalog, &state, date(2026, 3, 6));
    assert_eq!(ids(&filtered), vec![1, 4]);
}

#[test]
fn views_are_projections_of_the_filtered_set() {
    let catalog = demo_catalog();
    let state = FilterState::default();
    let filtered = compute_visible_shows(&catalog, &state, date(2026, 3, 6));

    let views = select_views(&filtered, DeviceClass::Desktop);
    assert_eq!(views.full, filtered);
    assert_eq!(views.snapshot, filtered[..5].to_vec());
    assert_eq!(ids(&views.featured), vec![1, 3, 7]);
    assert_eq!(ids(&views.closing_soon), vec![2, 5, 8]);

    let mobile = select_views(&filtered, DeviceClass::Mobile);
    assert_eq!(mobile.snapshot, filtered[..3].to_vec());
}

#[test]
fn demo_catalog_facets() {
    let facets = derive_facets(&demo_catalog());
    assert_eq!(
        facets.neighborhoods,
        vec![
            "Andersonville",
            "Bucktown",
            "Logan Square",
            "Pilsen",
            "Rogers Park"
        ]
    );
    assert_eq!(facets.tags, vec!["comedy", "devised", "drama"]);
}

#[test]
fn narrowing_then_clearing_restores_the_full_listing() {
    let catalog = demo_catalog();
    let today = date(2026, 3, 6);

    let mut state = FilterState::default();
    let unrestricted = compute_visible_shows(&catalog, &state, today);
    assert_eq!(unrestricted.len(), catalog.len());

    state.toggle_neighborhood("Pilsen");
    state.toggle_tag("drama");
    let narrowed = compute_visible_shows(&catalog, &state, today);
    assert!(narrowed.len() <= unrestricted.len());
    assert_eq!(ids(&narrowed), vec![1]);

    state.clear_neighborhoods();
    state.clear_tags();
    assert_eq!(compute_visible_shows(&catalog, &state, today), unrestricted);
}
