//! Home Page Component
//!
//! Hero, a few featured treatments, a few featured testimonials and a
//! closing call to action. Every call to action navigates.

use clinic_content::SiteContent;
use clinic_core::View;
use dioxus::prelude::*;

use crate::components::{NavLink, SectionTitle, ServiceCard, TestimonialCard};

/// Landing page component
#[component]
pub fn HomePage() -> Element {
    let site = use_context::<SiteContent>();
    let home = site.home.clone();
    let services = site.featured_services().to_vec();
    let testimonials = site.featured_testimonials().to_vec();
    let last_line = home.hero_title.len().saturating_sub(1);

    rsx! {
        div {
            class: "page home-page",

            // Hero Section
            section {
                class: "hero",
                div {
                    class: "container hero-grid",
                    div {
                        class: "hero-copy",
                        h1 {
                            for (i, line) in home.hero_title.iter().enumerate() {
                                span { key: "{i}", "{line}" }
                                if i < last_line {
                                    br {}
                                }
                            }
                        }
                        p { "{home.hero_body}" }
                        NavLink {
                            target: View::Appointment,
                            class: "button button-primary button-large",
                            "{home.hero_cta}"
                        }
                    }
                    div {
                        img {
                            class: "hero-image",
                            src: "{home.hero_image.src}",
                            alt: "{home.hero_image.alt}",
                        }
                    }
                }
            }

            // Services Overview
            section {
                class: "container",
                SectionTitle { heading: home.services_heading.clone() }
                div {
                    class: "card-grid card-grid-3",
                    for (i, service) in services.into_iter().enumerate() {
                        ServiceCard { key: "{i}", service: service, summary: true }
                    }
                }
                div {
                    class: "section-more",
                    NavLink {
                        target: View::Treatments,
                        class: "text-link",
                        "{home.see_all_services}"
                    }
                }
            }

            // Testimonials Overview
            section {
                class: "muted-band",
                div {
                    class: "container",
                    SectionTitle { heading: home.testimonials_heading.clone() }
                    div {
                        class: "card-grid card-grid-2 narrow",
                        for (i, testimonial) in testimonials.into_iter().enumerate() {
                            TestimonialCard { key: "{i}", testimonial: testimonial, highlight: true }
                        }
                    }
                    div {
                        class: "section-more",
                        NavLink {
                            target: View::Testimonials,
                            class: "text-link",
                            "{home.read_more_testimonials}"
                        }
                    }
                }
            }

            // Call to action
            section {
                class: "container",
                div {
                    class: "cta-banner",
                    h2 { "{home.call_to_action.title}" }
                    p { "{home.call_to_action.body}" }
                    NavLink {
                        target: View::Appointment,
                        class: "button button-inverse button-large",
                        "{home.call_to_action.button}"
                    }
                }
            }
        }
    }
}
