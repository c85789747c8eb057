//! # Card Components
//!
//! Presentational building blocks shared by the pages.

use clinic_content::{SectionHeading, Service, Testimonial};
use dioxus::prelude::*;

/// Highest rating a testimonial can show
pub const MAX_STARS: u8 = 5;

// ============================================================================
// Section Title
// ============================================================================

/// Centered title and subtitle above a page section
#[component]
pub fn SectionTitle(heading: SectionHeading) -> Element {
    rsx! {
        div {
            class: "section-title",
            h2 { "{heading.title}" }
            p { "{heading.subtitle}" }
        }
    }
}

// ============================================================================
// Service Card
// ============================================================================

/// Card describing one treatment.
///
/// The home page shows the short summary, the treatments page the full
/// description.
#[component]
pub fn ServiceCard(service: Service, #[props(default = false)] summary: bool) -> Element {
    let glyph = service.icon.glyph();
    let text = if summary {
        &service.summary
    } else {
        &service.description
    };

    rsx! {
        div {
            class: "card service-card",
            div {
                class: "service-icon",
                span { "{glyph}" }
            }
            h3 { "{service.title}" }
            p { "{text}" }
        }
    }
}

// ============================================================================
// Testimonial Card
// ============================================================================

/// Filled and empty star counts for a rating, clamped to 0..=5
pub fn star_counts(rating: u8) -> (u8, u8) {
    let filled = rating.min(MAX_STARS);
    (filled, MAX_STARS - filled)
}

/// A row of five stars
#[component]
pub fn StarRating(rating: u8) -> Element {
    let (filled, empty) = star_counts(rating);

    rsx! {
        div {
            class: "star-rating",
            title: "{filled} out of {MAX_STARS}",
            for i in 0..filled {
                span { key: "f{i}", class: "star star-filled", "★" }
            }
            for i in 0..empty {
                span { key: "e{i}", class: "star star-empty", "★" }
            }
        }
    }
}

/// Patient quote with rating and author
#[component]
pub fn TestimonialCard(
    testimonial: Testimonial,
    #[props(default = false)] highlight: bool,
) -> Element {
    let border = if highlight { "" } else { "card-bordered" };

    rsx! {
        div {
            class: "card testimonial-card {border}",
            StarRating { rating: testimonial.rating }
            p { class: "testimonial-quote", "\"{testimonial.quote}\"" }
            p { class: "testimonial-author", "- {testimonial.author}" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
