//! Validation rules for site content
//!
//! Content is checked once before the UI launches and by `clinic validate`.
//! Errors stop a launch; warnings describe content that still renders but
//! probably not the way the author meant.

use crate::site::SiteContent;
use clinic_core::SiteResult;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of a validation operation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// List of errors (empty if valid)
    pub errors: Vec<ValidationError>,

    /// List of warnings (non-fatal issues)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether an error with this code was reported
    pub fn has_error_code(&self, code: ValidationErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Whether a warning with this code was reported
    pub fn has_warning_code(&self, code: ValidationWarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Convert to SiteResult (fails if any errors)
    pub fn to_result(self) -> SiteResult<()> {
        if self.valid {
            return Ok(());
        }
        match self.errors.as_slice() {
            [single] => Err(clinic_core::SiteError::content_validation(
                single.path.clone(),
                single.message.clone(),
            )),
            errors => {
                let msg = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(clinic_core::SiteError::validation(msg))
            }
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// A validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling
    pub code: ValidationErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Dotted path to the problematic content (e.g. "testimonials.items[2].rating")
    pub path: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(
        code: ValidationErrorCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.path, self.message)
    }
}

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyBrandName,
    InvalidEmail,
    EmptyHeroTitle,
    NoServices,
    EmptyServiceTitle,
    NoTestimonials,
    EmptyTestimonial,
    RatingOutOfRange,
}

// ============================================================================
// ValidationWarning
// ============================================================================

/// A validation warning (non-fatal issue)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning code
    pub code: ValidationWarningCode,

    /// Human-readable warning message
    pub message: String,

    /// Path to the element
    pub path: String,
}

impl ValidationWarning {
    /// Create a new warning
    pub fn new(
        code: ValidationWarningCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] Warning: {}", self.path, self.message)
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    FeaturedCountTooLarge,
    SocialUrlNotHttp,
    PhoneWithoutDigits,
}

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// Trait for validation rules
pub trait ValidationRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// Validate site content and return the result
    fn validate(&self, content: &SiteContent) -> ValidationResult;
}

// ============================================================================
// Validator
// ============================================================================

/// Content validator that runs multiple validation rules
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with default rules
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(BrandRule));
        validator.add_rule(Box::new(ContactRule));
        validator.add_rule(Box::new(HomeRule));
        validator.add_rule(Box::new(ServicesRule));
        validator.add_rule(Box::new(TestimonialsRule));
        validator
    }

    /// Add a validation rule
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Validate content with all rules
    pub fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for rule in &self.rules {
            result.merge(rule.validate(content));
        }

        result
    }
}

/// Validate content with the default rules
pub fn validate_content(content: &SiteContent) -> ValidationResult {
    Validator::with_default_rules().validate(content)
}

// ============================================================================
// Built-in Validation Rules
// ============================================================================

/// Rule: the clinic has a name
pub struct BrandRule;

impl ValidationRule for BrandRule {
    fn name(&self) -> &'static str {
        "brand"
    }

    fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if content.brand.name.trim().is_empty() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::EmptyBrandName,
                "brand.name",
                "Clinic name cannot be empty",
            ));
        }
        result
    }
}

/// Rule: contact details and social links look usable
pub struct ContactRule;

impl ValidationRule for ContactRule {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let contact = &content.contact;

        if !EMAIL_RE.is_match(contact.email.trim()) {
            result.add_error(ValidationError::new(
                ValidationErrorCode::InvalidEmail,
                "contact.email",
                format!("'{}' is not an email address", contact.email),
            ));
        }

        if !contact.phone.chars().any(|c| c.is_ascii_digit()) {
            result.add_warning(ValidationWarning::new(
                ValidationWarningCode::PhoneWithoutDigits,
                "contact.phone",
                format!("Phone number '{}' contains no digits", contact.phone),
            ));
        }

        for (i, link) in content.social.iter().enumerate() {
            let url = link.url.trim();
            // "#" is the placeholder used until a real profile exists
            let ok = url == "#" || url.starts_with("http://") || url.starts_with("https://");
            if !ok {
                result.add_warning(ValidationWarning::new(
                    ValidationWarningCode::SocialUrlNotHttp,
                    format!("social[{}].url", i),
                    format!(
                        "{} link '{}' is not an http(s) URL",
                        link.network.display_name(),
                        link.url
                    ),
                ));
            }
        }

        result
    }
}

/// Rule: the home page has a hero and sensible featured counts
pub struct HomeRule;

impl ValidationRule for HomeRule {
    fn name(&self) -> &'static str {
        "home"
    }

    fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let home = &content.home;

        if home.hero_title.iter().all(|line| line.trim().is_empty()) {
            result.add_error(ValidationError::new(
                ValidationErrorCode::EmptyHeroTitle,
                "home.hero_title",
                "Hero title needs at least one non-empty line",
            ));
        }

        let services = content.treatments.services.len();
        if home.featured_services > services {
            result.add_warning(ValidationWarning::new(
                ValidationWarningCode::FeaturedCountTooLarge,
                "home.featured_services",
                format!(
                    "Featuring {} services but only {} exist",
                    home.featured_services, services
                ),
            ));
        }

        let testimonials = content.testimonials.items.len();
        if home.featured_testimonials > testimonials {
            result.add_warning(ValidationWarning::new(
                ValidationWarningCode::FeaturedCountTooLarge,
                "home.featured_testimonials",
                format!(
                    "Featuring {} testimonials but only {} exist",
                    home.featured_testimonials, testimonials
                ),
            ));
        }

        result
    }
}

/// Rule: there is at least one titled service
pub struct ServicesRule;

impl ValidationRule for ServicesRule {
    fn name(&self) -> &'static str {
        "services"
    }

    fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let services = &content.treatments.services;

        if services.is_empty() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::NoServices,
                "treatments.services",
                "At least one service is required",
            ));
        }

        for (i, service) in services.iter().enumerate() {
            if service.title.trim().is_empty() {
                result.add_error(ValidationError::new(
                    ValidationErrorCode::EmptyServiceTitle,
                    format!("treatments.services[{}].title", i),
                    "Service title cannot be empty",
                ));
            }
        }

        result
    }
}

/// Rule: testimonials have a quote, an author and a 1 to 5 rating
pub struct TestimonialsRule;

impl ValidationRule for TestimonialsRule {
    fn name(&self) -> &'static str {
        "testimonials"
    }

    fn validate(&self, content: &SiteContent) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let items = &content.testimonials.items;

        if items.is_empty() {
            result.add_error(ValidationError::new(
                ValidationErrorCode::NoTestimonials,
                "testimonials.items",
                "At least one testimonial is required",
            ));
        }

        for (i, item) in items.iter().enumerate() {
            let path = format!("testimonials.items[{}]", i);

            if item.quote.trim().is_empty() || item.author.trim().is_empty() {
                result.add_error(ValidationError::new(
                    ValidationErrorCode::EmptyTestimonial,
                    &path,
                    "Testimonial needs both a quote and an author",
                ));
            }

            if !(1..=5).contains(&item.rating) {
                result.add_error(ValidationError::new(
                    ValidationErrorCode::RatingOutOfRange,
                    format!("{}.rating", path),
                    format!("Rating {} is outside 1 to 5", item.rating),
                ));
            }
        }

        result
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use crate::site::{SocialLink, SocialNetwork};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = Variant::Clinic.content();
        let result = validate_content(&content);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        assert_eq!(
            Validator::with_default_rules().rule_names(),
            vec!["brand", "contact", "home", "services", "testimonials"]
        );
    }

    #[test]
    fn test_empty_brand_name() {
        let mut content = Variant::Clinic.content();
        content.brand.name = "   ".to_string();

        let result = validate_content(&content);
        assert!(!result.valid);
        assert!(result.has_error_code(ValidationErrorCode::EmptyBrandName));
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut content = Variant::Clinic.content();
        content.testimonials.items[2].rating = 6;
        content.testimonials.items[3].rating = 0;

        let result = validate_content(&content);
        let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["testimonials.items[2].rating", "testimonials.items[3].rating"]
        );
    }

    #[test]
    fn test_single_error_converts_to_content_validation() {
        let mut content = Variant::Clinic.content();
        content.contact.email = "not-an-email".to_string();

        let err = validate_content(&content).to_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Content validation failed at 'contact.email': 'not-an-email' is not an email address"
        );
    }

    #[test]
    fn test_empty_lists() {
        let mut content = Variant::Aesthetics.content();
        content.treatments.services.clear();
        content.testimonials.items.clear();

        let result = validate_content(&content);
        assert!(result.has_error_code(ValidationErrorCode::NoServices));
        assert!(result.has_error_code(ValidationErrorCode::NoTestimonials));
        // featured counts now exceed both lists
        assert_eq!(result.warnings.len(), 2);
        assert!(result.to_result().unwrap_err().is_validation());
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut content = Variant::Clinic.content();
        content.home.featured_testimonials = 10;
        content.contact.phone = "call us".to_string();
        content.social.push(SocialLink {
            network: SocialNetwork::Instagram,
            url: "instagram.com/clinic".to_string(),
        });

        let result = validate_content(&content);
        assert!(result.valid);
        assert!(result.has_warning_code(ValidationWarningCode::FeaturedCountTooLarge));
        assert!(result.has_warning_code(ValidationWarningCode::PhoneWithoutDigits));
        assert!(result.has_warning_code(ValidationWarningCode::SocialUrlNotHttp));
        assert_eq!(
            result.warnings[0].to_string(),
            "[contact.phone] Warning: Phone number 'call us' contains no digits"
        );
    }

    #[test]
    fn test_empty_hero_title() {
        let mut content = Variant::Clinic.content();
        content.home.hero_title = vec![String::new()];
        assert!(validate_content(&content).has_error_code(ValidationErrorCode::EmptyHeroTitle));
    }

    #[test]
    fn test_empty_testimonial_quote_or_author() {
        let mut content = Variant::Clinic.content();
        content.testimonials.items[0].quote = "  ".to_string();
        content.testimonials.items[4].author = String::new();

        let result = validate_content(&content);
        assert!(!result.valid);
        let flagged: Vec<&str> = result
            .errors
            .iter()
            .filter(|e| e.code == ValidationErrorCode::EmptyTestimonial)
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(flagged, vec!["testimonials.items[0]", "testimonials.items[4]"]);
    }

    #[test]
    fn test_empty_service_title() {
        let mut content = Variant::Clinic.content();
        content.treatments.services[1].title = "\t".to_string();

        let result = validate_content(&content);
        assert!(result.has_error_code(ValidationErrorCode::EmptyServiceTitle));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "treatments.services[1].title");
    }
}
