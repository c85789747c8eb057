//! # Clinic UI
//!
//! Dioxus Desktop UI for Clinic Site.
//!
//! This crate renders a single-window marketing site for a clinic: a header
//! and footer around one of four pages, switched in place without reloads.
//!
//! ## Features
//!
//! - Home, treatments, testimonials and appointment pages
//! - Header with a mobile menu that closes on navigation
//! - Appointment form with a local submitted/pending toggle
//! - Content and color tokens supplied at launch
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use clinic_content;
pub use clinic_core;

// Re-export main components
pub use app::App;
pub use pages::{
    AppointmentPage, HomePage, PageRenderer, TestimonialsPage, TreatmentsPage, ViewRenderer,
    view_renderer,
};
pub use state::{APP_STATE, AppState, MobileMenu, SubmissionState, UiState, navigate};

// Re-export components
pub use components::{
    Footer, FormGroup, FormInput, FormTextArea, Header, NavLink, SectionTitle, ServiceCard,
    StarRating, TestimonialCard,
};

use clinic_content::{SiteConfig, SiteContent, WindowConfig};
use clinic_core::SiteResult;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Clinic Site";

/// Base stylesheet, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop site
///
/// Loads and validates the configured content, then opens the window. Only
/// returns early with an error; once the window opens this runs until it is
/// closed.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> clinic_core::SiteResult<()> {
///     let config = clinic_content::SiteConfig::from_env()?;
///     clinic_ui::launch(&config)
/// }
/// ```
pub fn launch(config: &SiteConfig) -> SiteResult<()> {
    let content = config.load_content()?;
    let title = config.window_title(&content);

    tracing::info!(
        "Starting {} v{} ({})",
        NAME,
        VERSION,
        content.brand.name
    );

    launch_with_content(content, &title, &config.window);
    Ok(())
}

/// Launch with already loaded content
pub fn launch_with_content(content: SiteContent, title: &str, window: &WindowConfig) {
    let custom_head = custom_head(&content);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            WindowConfig::MIN_WIDTH,
                            WindowConfig::MIN_HEIGHT,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(content)
        .launch(App);
}

/// `<style>` block with the content's color tokens followed by the base
/// stylesheet
pub fn custom_head(content: &SiteContent) -> String {
    format!(
        r#"<style type="text/css">{}{}</style>"#,
        content.theme.to_css(),
        STYLES
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_content::Variant;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Clinic Site");
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".site-header"));
        assert!(STYLES.contains("var(--color-primary)"));
    }

    #[test]
    fn test_custom_head_carries_theme() {
        let content = Variant::Aesthetics.content();
        let head = custom_head(&content);

        assert!(head.starts_with("<style"));
        assert!(head.contains(&content.theme.primary));
        // Tokens come before the rules that use them
        let tokens = head.find("--color-primary:").unwrap();
        let rules = head.find(".site-header").unwrap();
        assert!(tokens < rules);
    }
}
