//! Testimonials Page Component

use clinic_content::SiteContent;
use dioxus::prelude::*;

use crate::components::{SectionTitle, TestimonialCard};

/// Every testimonial, bordered cards on a muted background
#[component]
pub fn TestimonialsPage() -> Element {
    let site = use_context::<SiteContent>();
    let testimonials = site.testimonials.clone();

    rsx! {
        div {
            class: "page testimonials-page muted-band",
            div {
                class: "container",
                SectionTitle { heading: testimonials.heading.clone() }
                div {
                    class: "card-grid card-grid-3",
                    for (i, testimonial) in testimonials.items.into_iter().enumerate() {
                        TestimonialCard { key: "{i}", testimonial: testimonial }
                    }
                }
            }
        }
    }
}
