//! Listing filter engine.
//!
//! Pure functions from (catalog, filter state, reference date) to the
//! visible show sequence plus derived facet enumerations. The reference
//! date is always injected by the caller; nothing in this module reads
//! the system clock.

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::models::{Facets, Show};

/// Named relative date window for the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// Shows with a performance on the reference date.
    Today,
    /// Shows with a performance on the next strictly-future Saturday or
    /// the Sunday after it.
    ThisWeekend,
    /// No date restriction.
    #[default]
    Calendar,
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateWindow::Today => write!(f, "today"),
            DateWindow::ThisWeekend => write!(f, "this_weekend"),
            DateWindow::Calendar => write!(f, "calendar"),
        }
    }
}

impl std::str::FromStr for DateWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "today" => Ok(DateWindow::Today),
            "this_weekend" => Ok(DateWindow::ThisWeekend),
            "calendar" => Ok(DateWindow::Calendar),
            _ => Err(anyhow::anyhow!("Invalid date window: {}", s)),
        }
    }
}

/// Active filter criteria, owned by the presentation layer and passed by
/// value into the engine. An empty facet set means "no restriction",
/// never "exclude everything".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub window: DateWindow,
    pub neighborhoods: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl FilterState {
    /// Multi-select toggle: an absent value is added, a present one removed.
    pub fn toggle_neighborhood(&mut self, value: &str) {
        if !self.neighborhoods.remove(value) {
            self.neighborhoods.insert(value.to_string());
        }
    }

    pub fn toggle_tag(&mut self, value: &str) {
        if !self.tags.remove(value) {
            self.tags.insert(value.to_string());
        }
    }

    /// Reset the neighborhood facet to "no restriction".
    pub fn clear_neighborhoods(&mut self) {
        self.neighborhoods.clear();
    }

    /// Reset the tag facet to "no restriction".
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}

/// The upcoming weekend relative to a reference date.
///
/// Saturday is always strictly after `today`: `offset = ((6 - weekday + 7)
/// mod 7)`, and a zero offset (today is Saturday) rolls to 7, so a Saturday
/// anchor points at next weekend rather than the day already underway.
fn upcoming_weekend(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let weekday = today.weekday().num_days_from_sunday() as i64; // Sun=0..Sat=6
    let mut offset = (6 - weekday + 7) % 7;
    if offset == 0 {
        offset = 7;
    }
    let saturday = today + Duration::days(offset);
    (saturday, saturday + Duration::days(1))
}

fn matches_window(show: &Show, window: DateWindow, today: NaiveDate) -> bool {
    match window {
        DateWindow::Calendar => true,
        DateWindow::Today => show.performances.iter().any(|d| *d == today),
        DateWindow::ThisWeekend => {
            let (saturday, sunday) = upcoming_weekend(today);
            show.performances
                .iter()
                .any(|d| *d == saturday || *d == sunday)
        }
    }
}

/// Compute the visible subset of the catalog under the given filter state.
///
/// The date window and both facet restrictions are conjunctive. Filtering
/// is stable: catalog order is preserved, never reordered. Total over
/// well-formed input; a show that cannot match (e.g. no performances under
/// a date window) is silently excluded rather than treated as an error.
pub fn compute_visible_shows(
    catalog: &[Show],
    state: &FilterState,
    today: NaiveDate,
) -> Vec<Show> {
    catalog
        .iter()
        .filter(|show| matches_window(show, state.window, today))
        .filter(|show| {
            state.neighborhoods.is_empty() || state.neighborhoods.contains(&show.neighborhood)
        })
        .filter(|show| state.tags.is_empty() || state.tags.contains(&show.tag))
        .cloned()
        .collect()
}

/// Distinct neighborhood and tag values present in the catalog, each in
/// lexicographic order, for populating the filter controls.
pub fn derive_facets(catalog: &[Show]) -> Facets {
    let neighborhoods: BTreeSet<&str> =
        catalog.iter().map(|s| s.neighborhood.as_str()).collect();
    let tags: BTreeSet<&str> = catalog.iter().map(|s| s.tag.as_str()).collect();

    Facets {
        neighborhoods: neighborhoods.into_iter().map(String::from).collect(),
        tags: tags.into_iter().map(String::from).collect(),
    }
}
