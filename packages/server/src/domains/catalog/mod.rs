pub mod data;
pub mod filter;
pub mod models;
pub mod views;

// Re-export commonly used types
pub use filter::{compute_visible_shows, derive_facets, DateWindow, FilterState};
pub use models::{Facets, Show};
pub use views::{select_views, DeviceClass, ShowViews};
