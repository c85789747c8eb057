//! # Clinic Content
//!
//! Site content, theme and launch configuration for Clinic Site.
//!
//! Both clinic sites are the same shell and pages rendering a different
//! `SiteContent`. This crate owns that content:
//!
//! - **SiteContent**: brand, color tokens, contact details and page copy
//! - **Variant**: the built-in content sets (`clinic`, `aesthetics`)
//! - **Content files**: versioned TOML/JSON files for custom content
//! - **Validation**: coded errors and warnings for a content set
//! - **SiteConfig**: environment-driven launch configuration
//!

pub mod config;
pub mod serialization;
pub mod site;
pub mod validation;
pub mod variants;

pub use config::{ENV_CONTENT, ENV_VARIANT, ENV_WINDOW, SiteConfig, WindowConfig};
pub use serialization::{
    ContentFile, ContentFormat, load_content, load_content_from_str, save_content,
    save_content_to_string,
};
pub use site::{
    AppointmentContent, Brand, CallToAction, Contact, HomeContent, Icon, Image, SectionHeading,
    Service, SiteContent, SocialLink, SocialNetwork, Testimonial, TestimonialsContent, Theme,
    TreatmentsContent,
};
pub use validation::{
    ValidationError, ValidationErrorCode, ValidationResult, ValidationRule, ValidationWarning,
    ValidationWarningCode, Validator, validate_content,
};
pub use variants::Variant;

// Re-export core types that are commonly used with content
pub use clinic_core::{SiteError, SiteResult};

/// Current schema version for content files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
