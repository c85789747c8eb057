//! Navigation anchor
//!
//! Every navigation control in the site is a `NavLink`: header links, the
//! logo, footer quick links and in-page calls to action. Clicking one never
//! follows the `href`; it updates the active page instead.

use clinic_core::View;
use dioxus::prelude::*;

use crate::state::navigate;

/// Anchor bound to `navigate(target)`.
///
/// When `on_navigate` is set the click is handed to it instead, so a caller
/// can run extra transitions (the mobile menu closes itself this way).
#[component]
pub fn NavLink(
    target: View,
    #[props(default = "nav-link".to_string())] class: String,
    #[props(default)] on_navigate: Option<EventHandler<View>>,
    children: Element,
) -> Element {
    let href = format!("#{}", target.slug());

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                match &on_navigate {
                    Some(handler) => handler.call(target),
                    None => navigate(target),
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_markup() {
        let html = dioxus_ssr::render_element(rsx! {
            NavLink { target: View::Testimonials, "Testimonials" }
        });
        assert!(html.contains("href=\"#testimonials\""));
        assert!(html.contains("class=\"nav-link\""));
        assert!(html.contains("Testimonials"));
    }
}
