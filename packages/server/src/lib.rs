// Chicago Storefront Theatre Tracker - API Core
//
// This crate provides the backend for browsing a fixed catalog of storefront
// and DIY theatre listings. The filtering core is pure and clock-free; the
// HTTP layer anchors "today" at the edge and serves the demo endpoints.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
