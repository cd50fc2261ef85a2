//! View projections over a filtered show sequence.
//!
//! All four views derive from the single filtered sequence produced by the
//! filter engine; none re-filters the catalog, so a show absent from the
//! filtered set can never surface in any projection.

use serde::{Deserialize, Serialize};

use super::models::Show;

/// Device class computed once per layout pass by the presentation layer
/// and threaded explicitly into view selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Number of shows in the snapshot preview.
    fn snapshot_size(self) -> usize {
        match self {
            DeviceClass::Mobile => 3,
            DeviceClass::Desktop => 5,
        }
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "mobile" => Ok(DeviceClass::Mobile),
            "desktop" => Ok(DeviceClass::Desktop),
            _ => Err(anyhow::anyhow!("Invalid device class: {}", s)),
        }
    }
}

/// The four named projections rendered by the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowViews {
    /// Truncated "current week" preview, sized by device class.
    pub snapshot: Vec<Show>,
    /// Shows flagged as featured.
    pub featured: Vec<Show>,
    /// The entire filtered sequence, order unchanged.
    pub full: Vec<Show>,
    /// Shows flagged for the "closing soon" rail.
    pub closing_soon: Vec<Show>,
}

/// Project the filtered sequence into the four listing-page views.
pub fn select_views(filtered: &[Show], device: DeviceClass) -> ShowViews {
    ShowViews {
        snapshot: filtered
            .iter()
            .take(device.snapshot_size())
            .cloned()
            .collect(),
        featured: filtered.iter().filter(|s| s.featured).cloned().collect(),
        full: filtered.to_vec(),
        closing_soon: filtered.iter().filter(|s| s.closing).cloned().collect(),
    }
}
