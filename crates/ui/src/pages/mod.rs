//! Page Components for Clinic Site
//!
//! One component per view, plus the registry that maps a page identifier to
//! the component that draws it.
//!
//! ## Available Pages
//!
//! - **HomePage**: hero, featured treatments and testimonials
//! - **TreatmentsPage**: every treatment with its full description
//! - **TestimonialsPage**: every patient testimonial
//! - **AppointmentPage**: request form and its confirmation
//!

pub mod appointment;
pub mod home;
pub mod testimonials;
pub mod treatments;

// Re-export page components for convenience
pub use appointment::{
    AppointmentConfirmation, AppointmentForm, AppointmentPage, AppointmentSection, book_another,
    submit_request,
};
pub use home::HomePage;
pub use testimonials::TestimonialsPage;
pub use treatments::TreatmentsPage;

use clinic_core::{PageIdentifier, View};
use dioxus::prelude::*;

/// Render function registered for a view
pub type ViewRenderer = fn() -> Element;

/// Look up the render function for a view
pub fn view_renderer(view: View) -> ViewRenderer {
    match view {
        View::Home => || rsx! { HomePage {} },
        View::Treatments => || rsx! { TreatmentsPage {} },
        View::Testimonials => || rsx! { TestimonialsPage {} },
        View::Appointment => || rsx! { AppointmentPage {} },
    }
}

/// Render the view for a page identifier.
///
/// Unknown identifiers render the home page; nothing is reported to the
/// visitor.
#[component]
pub fn PageRenderer(#[props(into)] page: PageIdentifier) -> Element {
    if !page.is_known() {
        tracing::debug!(page = %page, "unknown page, rendering home");
    }
    let render = view_renderer(clinic_core::render(&page));
    render()
}

// ============================================================================
// Tests
// ============================================================================
