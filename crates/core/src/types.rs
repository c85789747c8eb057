//! Core types used throughout Clinic Site
//!
//! The site has a closed set of views and an open-ended page identifier.
//! Navigation stores whatever identifier it is handed; only rendering maps
//! it onto a `View`, falling back to the home view for anything it does
//! not recognize.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// View Registry
// ============================================================================

/// A page view the site knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Landing page with hero, featured services and testimonials
    #[default]
    Home,
    /// Full list of treatments/services
    Treatments,
    /// Patient testimonials
    Testimonials,
    /// Appointment request form
    Appointment,
}

impl View {
    /// Every view, in navigation order
    pub const ALL: [View; 4] = [
        View::Home,
        View::Treatments,
        View::Testimonials,
        View::Appointment,
    ];

    /// The identifier that selects this view
    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Treatments => "treatments",
            View::Testimonials => "testimonials",
            View::Appointment => "appointment",
        }
    }

    /// Get the display name for this view
    pub fn display_name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Treatments => "Treatments",
            View::Testimonials => "Testimonials",
            View::Appointment => "Book Appointment",
        }
    }

    /// Exact lookup of a slug. Matching is case-sensitive.
    pub fn from_slug(slug: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.slug() == slug)
    }

    /// Whether this view is one of the plain links in the desktop header
    pub fn in_header_links(&self) -> bool {
        !matches!(self, View::Appointment)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ============================================================================
// Page Identifier
// ============================================================================

/// The identifier of the active page, stored exactly as navigated to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIdentifier(String);

impl PageIdentifier {
    /// Create an identifier from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known view this identifier names, if any
    pub fn known_view(&self) -> Option<View> {
        View::from_slug(&self.0)
    }

    /// Whether this identifier names a known view
    pub fn is_known(&self) -> bool {
        self.known_view().is_some()
    }

    /// Resolve to the view that renders for this identifier
    pub fn resolve(&self) -> View {
        self.known_view().unwrap_or(View::Home)
    }
}

impl Default for PageIdentifier {
    fn default() -> Self {
        View::Home.into()
    }
}

impl From<View> for PageIdentifier {
    fn from(view: View) -> Self {
        Self(view.slug().to_string())
    }
}

impl From<&str> for PageIdentifier {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PageIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<View> for PageIdentifier {
    fn eq(&self, other: &View) -> bool {
        self.0 == other.slug()
    }
}

impl fmt::Display for PageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Select the view for a page identifier.
///
/// Unknown identifiers render the home view. No error is raised.
pub fn render(page: &PageIdentifier) -> View {
    page.resolve()
}

// ============================================================================
// Tests
// ============================================================================
