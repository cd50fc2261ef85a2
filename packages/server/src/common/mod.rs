// Common types and utilities shared across the application

pub mod toast;

pub use toast::Toaster;
