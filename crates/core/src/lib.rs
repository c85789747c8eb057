//! # Clinic Core
//!
//! Core types and error handling for Clinic Site.
//!
//! This crate provides the foundational building blocks shared by the
//! content model, the UI and the command-line tool:
//!
//! - **Types**: `PageIdentifier` and the closed set of `View`s it resolves to
//! - **Errors**: Unified error handling with `SiteError` and `SiteResult`
//!

pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{SiteError, SiteResult};
pub use types::{PageIdentifier, View, render};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
