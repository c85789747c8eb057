//! # Layout Components
//!
//! The header and footer that render around every page. Both issue
//! navigation; the header also owns the mobile menu's open/closed state.

use chrono::Datelike;
use clinic_content::{Icon, SiteContent};
use clinic_core::View;
use dioxus::prelude::*;

use crate::components::NavLink;
use crate::state::{APP_STATE, MobileMenu};

/// Views listed as plain links in the desktop header, with their labels
fn header_links() -> Vec<(View, &'static str)> {
    all_links()
        .into_iter()
        .filter(|(view, _)| view.in_header_links())
        .collect()
}

/// Every view with its label
fn all_links() -> Vec<(View, &'static str)> {
    View::ALL
        .into_iter()
        .map(|view| (view, view.display_name()))
        .collect()
}

// ============================================================================
// Header
// ============================================================================

/// Sticky site header with logo, links and the mobile menu
#[component]
pub fn Header() -> Element {
    let menu = use_signal(MobileMenu::new);

    rsx! {
        HeaderBar { menu: menu }
    }
}

/// Header contents, with the mobile menu state passed in
#[component]
pub fn HeaderBar(menu: Signal<MobileMenu>) -> Element {
    let site = use_context::<SiteContent>();
    let open = menu.read().is_open();
    let logo = site.brand.logo.glyph();

    rsx! {
        header {
            class: "site-header",

            nav {
                class: "container header-bar",

                // Logo
                NavLink {
                    target: View::Home,
                    class: "brand",
                    span { class: "brand-logo", "{logo}" }
                    span { class: "brand-name", "{site.brand.name}" }
                }

                // Desktop links
                div {
                    class: "desktop-links",
                    for (view, label) in header_links() {
                        NavLink { key: "{view}", target: view, "{label}" }
                    }
                }

                NavLink {
                    target: View::Appointment,
                    class: "button button-primary desktop-only",
                    "Book Appointment"
                }

                // Mobile toggle
                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| toggle_menu(menu),
                    if open { "✕" } else { "☰" }
                }
            }

            if open {
                MobileMenuPanel {
                    on_navigate: move |view: View| navigate_from_menu(menu, view),
                }
            }
        }
    }
}

/// Open or close the mobile menu
pub fn toggle_menu(mut menu: Signal<MobileMenu>) {
    menu.write().toggle();
    tracing::debug!(open = menu.peek().is_open(), "mobile menu toggled");
}

/// Navigate from a mobile menu entry; the menu always ends up closed
pub fn navigate_from_menu(mut menu: Signal<MobileMenu>, view: View) {
    menu.write().navigate(&mut APP_STATE.write().ui, view);
}

/// Dropdown shown on small screens while the mobile menu is open
#[component]
pub fn MobileMenuPanel(on_navigate: EventHandler<View>) -> Element {
    rsx! {
        div {
            class: "mobile-menu",
            nav {
                for (view, label) in header_links() {
                    NavLink {
                        key: "{view}",
                        target: view,
                        class: "mobile-link",
                        on_navigate: on_navigate,
                        "{label}"
                    }
                }
                NavLink {
                    target: View::Appointment,
                    class: "button button-primary mobile-book",
                    on_navigate: on_navigate,
                    "Book Appointment"
                }
            }
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Site footer with quick links, contact details and social links
#[component]
pub fn Footer() -> Element {
    let site = use_context::<SiteContent>();
    let year = chrono::Local::now().year();
    let contact = [
        (Icon::Phone.glyph(), site.contact.phone.clone()),
        (Icon::Mail.glyph(), site.contact.email.clone()),
        (Icon::MapPin.glyph(), site.contact.address.clone()),
    ];
    let social: Vec<(String, &'static str, &'static str)> = site
        .social
        .iter()
        .map(|link| {
            (
                link.url.clone(),
                link.network.display_name(),
                link.network.badge(),
            )
        })
        .collect();

    rsx! {
        footer {
            class: "site-footer",

            div {
                class: "container footer-grid",

                div {
                    h3 { "{site.brand.name}" }
                    p { "{site.brand.blurb}" }
                }

                div {
                    h3 { "Quick Links" }
                    ul {
                        for (view, label) in all_links() {
                            li {
                                key: "{view}",
                                NavLink {
                                    target: view,
                                    class: "footer-link",
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                div {
                    h3 { "Contact Us" }
                    ul {
                        for (glyph, text) in contact {
                            li {
                                class: "contact-item",
                                span { "{glyph}" }
                                span { "{text}" }
                            }
                        }
                    }
                }

                div {
                    h3 { "Follow Us" }
                    div {
                        class: "social-links",
                        for (url, name, badge) in social {
                            a {
                                class: "footer-link social-link",
                                href: "{url}",
                                title: "{name}",
                                "{badge}"
                            }
                        }
                    }
                }
            }

            div {
                class: "copyright",
                "© {year} {site.brand.name}. All rights reserved."
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_content::Variant;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hands the header's menu signal back to the test
    #[derive(Clone, Default)]
    struct MenuSlot(Rc<Cell<Option<Signal<MobileMenu>>>>);

    fn header_root() -> Element {
        let menu = use_signal(MobileMenu::new);
        use_context::<MenuSlot>().0.set(Some(menu));
        rsx! { HeaderBar { menu: menu } }
    }

    fn rerender(dom: &mut VirtualDom) -> String {
        dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn test_mobile_navigation_closes_menu() {
        let slot = MenuSlot::default();
        let mut dom = VirtualDom::new(header_root)
            .with_root_context(Variant::Clinic.content())
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        let menu = slot.0.get().unwrap();

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("class=\"mobile-menu\""));
        assert!(html.contains("☰"));

        dom.in_runtime(|| toggle_menu(menu));
        let html = rerender(&mut dom);
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("✕"));

        dom.in_runtime(|| navigate_from_menu(menu, View::Treatments));
        let html = rerender(&mut dom);
        assert!(!html.contains("class=\"mobile-menu\""));
        assert_eq!(
            dom.in_runtime(|| APP_STATE.read().ui.current_page().clone()),
            View::Treatments
        );
    }

    #[test]
    fn test_mobile_navigation_to_current_page_closes_menu() {
        let slot = MenuSlot::default();
        let mut dom = VirtualDom::new(header_root)
            .with_root_context(Variant::Clinic.content())
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        let menu = slot.0.get().unwrap();

        dom.in_runtime(|| toggle_menu(menu));
        dom.in_runtime(|| navigate_from_menu(menu, View::Home));
        let html = rerender(&mut dom);
        assert!(!html.contains("class=\"mobile-menu\""));
        assert_eq!(
            dom.in_runtime(|| APP_STATE.read().ui.current_page().clone()),
            View::Home
        );
    }

    #[test]
    fn test_mobile_panel_lists_every_view() {
        let html = dioxus_ssr::render_element(rsx! {
            MobileMenuPanel { on_navigate: |_| {} }
        });
        for view in View::ALL {
            assert!(html.contains(&format!("href=\"#{}\"", view.slug())));
        }
    }
}
