pub mod show;

pub use show::{Facets, Show};
