//! Treatments Page Component

use clinic_content::SiteContent;
use dioxus::prelude::*;

use crate::components::{SectionTitle, ServiceCard};

/// Full list of treatments with their long descriptions
#[component]
pub fn TreatmentsPage() -> Element {
    let site = use_context::<SiteContent>();
    let treatments = site.treatments.clone();

    rsx! {
        div {
            class: "page treatments-page",
            div {
                class: "container",
                SectionTitle { heading: treatments.heading.clone() }
                div {
                    class: "card-grid card-grid-3",
                    for (i, service) in treatments.services.into_iter().enumerate() {
                        ServiceCard { key: "{i}", service: service }
                    }
                }
            }
        }
    }
}
