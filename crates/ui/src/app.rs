//! Main Application Component for Clinic Site
//!
//! The root component: header, the active page, footer.

use clinic_content::SiteContent;
use dioxus::prelude::*;

use crate::components::{Footer, Header};
use crate::pages::PageRenderer;
use crate::state::use_current_page;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component.
///
/// Expects the [`SiteContent`] to be provided as context by the launcher.
#[component]
pub fn App() -> Element {
    let site = use_context::<SiteContent>();
    let brand = site.brand.name.clone();

    use_effect(move || {
        tracing::info!(brand = %brand, "site shell mounted");
    });

    rsx! {
        div {
            class: "site",

            Header {}

            main {
                class: "site-main",
                MainContent {}
            }

            Footer {}
        }
    }
}

// ============================================================================
// Main Content Area
// ============================================================================

/// The page for the active identifier
#[component]
fn MainContent() -> Element {
    let page = use_current_page();

    rsx! {
        PageRenderer { page: page }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_content::Variant;

    fn render_app(content: SiteContent) -> String {
        let mut dom = VirtualDom::new(App).with_root_context(content);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_app_starts_on_home() {
        let content = Variant::Clinic.content();
        let html = render_app(content.clone());

        assert!(html.contains("site-header"));
        assert!(html.contains("site-footer"));
        assert!(html.contains("home-page"));
        assert!(html.contains(&content.home.hero_body));
    }

    #[test]
    fn test_shell_links_every_view() {
        let html = render_app(Variant::Clinic.content());
        for slug in ["#home", "#treatments", "#testimonials", "#appointment"] {
            assert!(html.contains(&format!("href=\"{slug}\"")), "missing {slug}");
        }
    }

    #[test]
    fn test_mobile_menu_starts_closed() {
        let html = render_app(Variant::Clinic.content());
        assert!(!html.contains("class=\"mobile-menu\""));
        assert!(html.contains("menu-toggle"));
    }

    #[test]
    fn test_footer_uses_variant_contact() {
        let content = Variant::Clinic.content();
        let html = render_app(content.clone());
        assert!(html.contains(&content.contact.email));
        assert!(html.contains("All rights reserved."));
    }
}
