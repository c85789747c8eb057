//! Application State Management for Clinic Site
//!
//! This module provides state management using Dioxus 0.7 Signals.
//!
//! There are three independent pieces of state:
//!
//! - the active page identifier, process-wide in [`APP_STATE`]
//! - the appointment form's [`SubmissionState`], local to the page instance
//! - the header's [`MobileMenu`], local to the header
//!
//! Every transition runs synchronously inside the event handler that
//! triggered it.

use clinic_core::{PageIdentifier, View};
use dioxus::prelude::*;

// ============================================================================
// Navigation
// ============================================================================

/// Navigation state: which page is active
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Currently active page, exactly as last navigated to
    pub active_page: PageIdentifier,
}

impl UiState {
    /// Create new UI state on the home page
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page.
    ///
    /// Any identifier is stored as given. Unknown identifiers render the
    /// home view; that fallback happens at render time, not here.
    pub fn navigate(&mut self, target: impl Into<PageIdentifier>) {
        let target = target.into();
        if self.active_page == target {
            return;
        }
        let from = std::mem::replace(&mut self.active_page, target);
        tracing::debug!(
            from = %from,
            to = %self.active_page,
            view = %self.active_view(),
            "navigate"
        );
    }

    /// The active page identifier
    pub fn current_page(&self) -> &PageIdentifier {
        &self.active_page
    }

    /// The view the active page renders
    pub fn active_view(&self) -> View {
        clinic_core::render(&self.active_page)
    }
}

// ============================================================================
// Appointment Form Submission
// ============================================================================

/// Whether the appointment form has been submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// The form is showing
    #[default]
    Pending,
    /// The confirmation is showing
    Submitted,
}

impl SubmissionState {
    /// `pending -> submitted`. Returns whether the state changed.
    pub fn submit(&mut self) -> bool {
        match self {
            SubmissionState::Pending => {
                *self = SubmissionState::Submitted;
                tracing::debug!("appointment request marked submitted");
                true
            }
            SubmissionState::Submitted => false,
        }
    }

    /// `submitted -> pending`. Returns whether the state changed.
    pub fn reset(&mut self) -> bool {
        match self {
            SubmissionState::Submitted => {
                *self = SubmissionState::Pending;
                tracing::debug!("appointment form reset");
                true
            }
            SubmissionState::Pending => false,
        }
    }

    /// Check if the confirmation should show
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }
}

// ============================================================================
// Mobile Menu
// ============================================================================

/// Open/closed state of the header's mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Create a closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the menu
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Navigate from a menu entry. The menu is always closed afterwards.
    pub fn navigate(&mut self, ui: &mut UiState, target: impl Into<PageIdentifier>) {
        ui.navigate(target);
        self.close();
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Navigation state
    pub ui: UiState,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal.
///
/// Created on first use with the home page active; it lives until the
/// process exits and is never persisted.
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Navigate the running application to a page
pub fn navigate(target: impl Into<PageIdentifier>) {
    APP_STATE.write().ui.navigate(target);
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current page identifier
pub fn use_current_page() -> PageIdentifier {
    let state = APP_STATE.read();
    state.ui.current_page().clone()
}

// ============================================================================
// Tests
// ============================================================================
