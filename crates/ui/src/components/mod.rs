//! # UI Components
//!
//! Reusable Dioxus components for the clinic site.
//!
//! - **Layout**: the `Header` and `Footer` that wrap every page
//! - **NavLink**: an anchor that navigates instead of following its href
//! - **Cards**: section titles, service cards and testimonial cards
//! - **Form**: labeled inputs for the appointment form
//!
//! ## Component Hierarchy
//!
//! ```text
//! App
//! ├── Header
//! │   └── HeaderBar
//! │       ├── NavLink (logo, desktop links, book button)
//! │       └── MobileMenuPanel
//! │           └── NavLink (multiple)
//! ├── PageRenderer
//! │   └── HomePage | TreatmentsPage | TestimonialsPage | AppointmentPage
//! │       ├── SectionTitle
//! │       ├── ServiceCard / TestimonialCard
//! │       └── FormGroup / FormInput / FormTextArea
//! └── Footer
//!     └── NavLink (quick links)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod cards;
pub mod form;
pub mod layout;
pub mod nav_link;

// ============================================================================
// Re-exports
// ============================================================================

pub use cards::{SectionTitle, ServiceCard, StarRating, TestimonialCard, star_counts};
pub use form::{FormGroup, FormInput, FormTextArea};
pub use layout::{
    Footer, Header, HeaderBar, MobileMenuPanel, navigate_from_menu, toggle_menu,
};
pub use nav_link::NavLink;
