//! Error types for Clinic Site
//!
//! Navigation and the appointment form never fail. Everything here comes
//! from loading site content and configuration before the UI starts, or
//! from the command-line tool working on content files.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Clinic Site
#[derive(Debug, Error)]
pub enum SiteError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A specific piece of site content failed validation
    #[error("Content validation failed at '{path}': {message}")]
    ContentValidation { path: String, message: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Content file not found
    #[error("Content file not found at path: {0}")]
    ContentNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// File extension is not a known content format
    #[error("Unsupported content format: '{0}' (expected toml or json)")]
    UnsupportedFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected at most {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown site variant name
    #[error("Unknown site variant: '{0}' (expected clinic or aesthetics)")]
    UnknownVariant(String),
}

impl SiteError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        SiteError::Validation(msg.into())
    }

    /// Create a content validation error for a dotted content path
    pub fn content_validation(path: impl Into<String>, msg: impl Into<String>) -> Self {
        SiteError::ContentValidation {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        SiteError::InvalidConfig(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SiteError::Validation(_) | SiteError::ContentValidation { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::ContentNotFound(_))
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            SiteError::Io(_)
                | SiteError::FileRead { .. }
                | SiteError::FileWrite { .. }
                | SiteError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = SiteError::validation("Brand name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Brand name is required");
    }

    #[test]
    fn test_content_validation_error() {
        let err = SiteError::content_validation("testimonials.items[2].rating", "must be 1 to 5");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Content validation failed at 'testimonials.items[2].rating': must be 1 to 5"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = SiteError::ContentNotFound(PathBuf::from("site.toml"));
        assert!(err.is_not_found());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Content file not found at path: site.toml");
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = SiteError::UnknownVariant("dental".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown site variant: 'dental' (expected clinic or aesthetics)"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(err.is_io());
    }
}
