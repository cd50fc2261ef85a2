use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A show listing in the catalog.
///
/// The catalog is a static, read-only snapshot supplied at process start.
/// `neighborhood` and `tag` form implicit enumerations: their valid values
/// are exactly the distinct values present across all shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub neighborhood: String, // 'Pilsen', 'Andersonville', etc.
    pub tag: String,          // 'comedy', 'drama', 'devised', etc.
    /// Calendar dates the show is performed on. Order irrelevant; a show
    /// with no performances never matches a date window.
    pub performances: Vec<NaiveDate>,
    /// Informational only; the "closing soon" rail is driven by `closing`.
    pub closing_date: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub closing: bool,
}

/// Distinct facet values present in the catalog, sorted lexicographically.
/// Powers the filter controls on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub neighborhoods: Vec<String>,
    pub tags: Vec<String>,
}
