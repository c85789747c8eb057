//! Site content model
//!
//! Everything that differs between two clinic sites lives here: the brand,
//! color tokens, contact details and the copy shown on each page. One shell
//! and one set of page components render any `SiteContent`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Icons
// ============================================================================

/// Icon shown on cards, in the header logo and next to contact details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    PlusSquare,
    Stethoscope,
    Heart,
    User,
    Bone,
    Brain,
    MessageSquare,
    Sparkles,
    Droplet,
    Sun,
    Leaf,
    Phone,
    Mail,
    MapPin,
    Calendar,
}

impl Icon {
    /// Get the glyph used to draw this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::PlusSquare => "➕",
            Icon::Stethoscope => "🩺",
            Icon::Heart => "❤️",
            Icon::User => "👤",
            Icon::Bone => "🦴",
            Icon::Brain => "🧠",
            Icon::MessageSquare => "💬",
            Icon::Sparkles => "✨",
            Icon::Droplet => "💧",
            Icon::Sun => "☀️",
            Icon::Leaf => "🌿",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
            Icon::Calendar => "📅",
        }
    }
}

// ============================================================================
// Brand & Theme
// ============================================================================

/// Clinic name and logo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Clinic name shown in header, footer and copyright line
    pub name: String,
    /// Short blurb under the name in the footer
    pub blurb: String,
    /// Logo icon next to the name in the header
    #[serde(default = "default_logo")]
    pub logo: Icon,
}

fn default_logo() -> Icon {
    Icon::PlusSquare
}

/// Color tokens, emitted as CSS custom properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub primary_hover: String,
    pub primary_soft: String,
    pub surface_muted: String,
    pub heading: String,
    pub body: String,
    pub star: String,
    pub star_empty: String,
    pub success: String,
    pub footer_background: String,
}

impl Theme {
    /// Pairs of CSS custom property name and value
    pub fn css_variables(&self) -> [(&'static str, &str); 10] {
        [
            ("--color-primary", &self.primary),
            ("--color-primary-hover", &self.primary_hover),
            ("--color-primary-soft", &self.primary_soft),
            ("--color-surface-muted", &self.surface_muted),
            ("--color-heading", &self.heading),
            ("--color-body", &self.body),
            ("--color-star", &self.star),
            ("--color-star-empty", &self.star_empty),
            ("--color-success", &self.success),
            ("--color-footer", &self.footer_background),
        ]
    }

    /// A `:root { ... }` block declaring every token
    pub fn to_css(&self) -> String {
        let body: String = self
            .css_variables()
            .iter()
            .map(|(name, value)| format!("  {}: {};\n", name, value))
            .collect();
        format!(":root {{\n{}}}\n", body)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            primary_hover: "#1d4ed8".to_string(),
            primary_soft: "#eff6ff".to_string(),
            surface_muted: "#f8fafc".to_string(),
            heading: "#1e293b".to_string(),
            body: "#475569".to_string(),
            star: "#facc15".to_string(),
            star_empty: "#cbd5e1".to_string(),
            success: "#16a34a".to_string(),
            footer_background: "#1e293b".to_string(),
        }
    }
}

// ============================================================================
// Contact & Social
// ============================================================================

/// Contact details listed in the footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Social network a footer link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl SocialNetwork {
    /// Get the display name for this network
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Linkedin => "LinkedIn",
            SocialNetwork::Instagram => "Instagram",
        }
    }

    /// Short badge text drawn in the footer
    pub fn badge(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "f",
            SocialNetwork::Twitter => "𝕏",
            SocialNetwork::Linkedin => "in",
            SocialNetwork::Instagram => "◎",
        }
    }
}

/// A footer social link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

// ============================================================================
// Shared Pieces
// ============================================================================

/// Title and subtitle above a page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

impl SectionHeading {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// A treatment or service offered by the clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub icon: Icon,
    pub title: String,
    /// Short description used on the home page
    pub summary: String,
    /// Full description used on the treatments page
    pub description: String,
}

/// A patient testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    /// Star rating, 1 to 5
    pub rating: u8,
}

/// Image with alt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Closing call-to-action banner on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

// ============================================================================
// Page Content
// ============================================================================

/// Home page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Hero title, one entry per line
    pub hero_title: Vec<String>,
    pub hero_body: String,
    pub hero_cta: String,
    pub hero_image: Image,
    pub services_heading: SectionHeading,
    /// How many treatments to feature on the home page
    #[serde(default = "default_featured_services")]
    pub featured_services: usize,
    pub see_all_services: String,
    pub testimonials_heading: SectionHeading,
    /// How many testimonials to feature on the home page
    #[serde(default = "default_featured_testimonials")]
    pub featured_testimonials: usize,
    pub read_more_testimonials: String,
    pub call_to_action: CallToAction,
}

fn default_featured_services() -> usize {
    3
}

fn default_featured_testimonials() -> usize {
    2
}

/// Treatments page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentsContent {
    pub heading: SectionHeading,
    pub services: Vec<Service>,
}

/// Testimonials page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub heading: SectionHeading,
    pub items: Vec<Testimonial>,
}

/// Appointment page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentContent {
    pub heading: SectionHeading,
    pub submit_label: String,
    pub confirmation_title: String,
    pub confirmation_body: String,
    pub retry_label: String,
}

// ============================================================================
// Site Content
// ============================================================================

/// Everything one clinic site renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    #[serde(default)]
    pub theme: Theme,
    pub contact: Contact,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub home: HomeContent,
    pub treatments: TreatmentsContent,
    pub testimonials: TestimonialsContent,
    pub appointment: AppointmentContent,
}

impl SiteContent {
    /// Services featured on the home page, clamped to what exists
    pub fn featured_services(&self) -> &[Service] {
        let count = self.home.featured_services.min(self.treatments.services.len());
        &self.treatments.services[..count]
    }

    /// Testimonials featured on the home page, clamped to what exists
    pub fn featured_testimonials(&self) -> &[Testimonial] {
        let count = self
            .home
            .featured_testimonials
            .min(self.testimonials.items.len());
        &self.testimonials.items[..count]
    }

    /// Window title for the desktop shell
    pub fn window_title(&self) -> String {
        self.brand.name.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn test_featured_slices_are_clamped() {
        let mut content = Variant::Clinic.content();
        content.home.featured_services = 50;
        content.home.featured_testimonials = 0;

        assert_eq!(
            content.featured_services().len(),
            content.treatments.services.len()
        );
        assert!(content.featured_testimonials().is_empty());
    }

    #[test]
    fn test_featured_services_keep_order() {
        let content = Variant::Clinic.content();
        let featured = content.featured_services();
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].title, content.treatments.services[0].title);
    }

    #[test]
    fn test_theme_css() {
        let css = Theme::default().to_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --color-primary: #2563eb;\n"));
        assert!(css.contains("--color-footer: #1e293b;"));
    }

    #[test]
    fn test_icon_glyphs_are_not_empty() {
        for icon in [Icon::PlusSquare, Icon::Stethoscope, Icon::Calendar, Icon::Sparkles] {
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_icon_serde_names() {
        let json = serde_json::to_string(&Icon::MessageSquare).unwrap();
        assert_eq!(json, "\"message-square\"");
        let network: SocialNetwork = serde_json::from_str("\"linkedin\"").unwrap();
        assert_eq!(network.display_name(), "LinkedIn");
    }
}
