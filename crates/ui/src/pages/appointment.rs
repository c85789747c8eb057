//! Appointment Page Component
//!
//! Shows the request form until it is submitted, then a confirmation with a
//! button that brings the empty form back. Field values are never read or
//! sent anywhere.

use clinic_content::{AppointmentContent, Icon, SiteContent};
use dioxus::prelude::*;

use crate::components::{FormGroup, FormInput, FormTextArea, SectionTitle};
use crate::state::SubmissionState;

/// Appointment page.
///
/// The submission state belongs to this page instance. Leaving the page
/// unmounts it, so coming back always starts on the form.
#[component]
pub fn AppointmentPage() -> Element {
    let submission = use_signal(SubmissionState::default);

    rsx! {
        AppointmentSection { submission: submission }
    }
}

/// Heading plus the form or its confirmation, whichever `submission` selects
#[component]
pub fn AppointmentSection(submission: Signal<SubmissionState>) -> Element {
    let site = use_context::<SiteContent>();
    let appointment = site.appointment.clone();
    let submitted = submission.read().is_submitted();

    rsx! {
        div {
            class: "page appointment-page",
            div {
                class: "container narrow",
                SectionTitle { heading: appointment.heading.clone() }

                div {
                    class: "card appointment-card",
                    if submitted {
                        AppointmentConfirmation {
                            content: appointment.clone(),
                            on_reset: move |_| book_another(submission),
                        }
                    } else {
                        AppointmentForm {
                            submit_label: appointment.submit_label.clone(),
                            on_submit: move |_| submit_request(submission),
                        }
                    }
                }
            }
        }
    }
}

/// The form was submitted: show the confirmation
pub fn submit_request(mut submission: Signal<SubmissionState>) {
    submission.write().submit();
}

/// "Book another": back to an empty form
pub fn book_another(mut submission: Signal<SubmissionState>) {
    submission.write().reset();
}

/// Request form. Submitting it only fires `on_submit`.
#[component]
pub fn AppointmentForm(submit_label: String, on_submit: EventHandler<()>) -> Element {
    rsx! {
        form {
            class: "appointment-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },

            FormGroup {
                label: "Full Name",
                FormInput {
                    name: "name",
                    placeholder: "John Doe",
                    icon: Icon::User,
                }
            }

            div {
                class: "form-row",
                FormGroup {
                    label: "Phone Number",
                    FormInput {
                        name: "phone",
                        input_type: "tel",
                        placeholder: "(123) 456-7890",
                        icon: Icon::Phone,
                    }
                }
                FormGroup {
                    label: "Email Address",
                    FormInput {
                        name: "email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        icon: Icon::Mail,
                    }
                }
            }

            FormGroup {
                label: "Preferred Date",
                FormInput {
                    name: "date",
                    input_type: "date",
                    icon: Icon::Calendar,
                }
            }

            FormGroup {
                label: "Reason for Visit",
                FormTextArea {
                    name: "reason",
                    placeholder: "Briefly describe your symptoms or reason for visit...",
                }
            }

            button {
                class: "button button-primary button-block",
                r#type: "submit",
                "{submit_label}"
            }
        }
    }
}

/// Confirmation shown after a request is submitted
#[component]
pub fn AppointmentConfirmation(
    content: AppointmentContent,
    on_reset: EventHandler<()>,
) -> Element {
    let glyph = Icon::Calendar.glyph();

    rsx! {
        div {
            class: "confirmation",
            div {
                class: "confirmation-icon",
                "{glyph}"
            }
            h3 { "{content.confirmation_title}" }
            p { "{content.confirmation_body}" }
            button {
                class: "button button-primary",
                r#type: "button",
                onclick: move |_| on_reset.call(()),
                "{content.retry_label}"
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

    fn content() -> AppointmentContent {
        Variant::Clinic.content().appointment
    }

    #[test]
    fn test_form_has_required_fields() {
        let html = dioxus_ssr::render_element(rsx! {
            AppointmentForm { submit_label: "Submit Request", on_submit: |_| {} }
        });
        assert!(html.contains("<form"));
        for name in ["name", "phone", "email", "date", "reason"] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(html.contains("type=\"tel\""));
        assert!(html.contains("(123) 456-7890"));
        assert!(html.contains("Submit Request"));
    }

    #[test]
    fn test_confirmation_copy() {
        let content = content();
        let html = dioxus_ssr::render_element(rsx! {
            AppointmentConfirmation { content: content.clone(), on_reset: |_| {} }
        });
        assert!(html.contains(&content.confirmation_title));
        assert!(html.contains(&content.retry_label));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_name_alone_phone_and_email_share_a_row() {
        let html = dioxus_ssr::render_element(rsx! {
            AppointmentForm { submit_label: "Submit Request", on_submit: |_| {} }
        });
        let name = html.find("name=\"name\"").unwrap();
        let row = html.find("form-row").unwrap();
        let phone = html.find("name=\"phone\"").unwrap();
        let email = html.find("name=\"email\"").unwrap();
        let date = html.find("name=\"date\"").unwrap();
        assert!(name < row);
        assert!(row < phone && phone < email && email < date);
    }

    #[test]
    fn test_page_starts_on_form() {
        fn root() -> Element {
            rsx! { AppointmentPage {} }
        }

        let mut dom = VirtualDom::new(root).with_root_context(Variant::Clinic.content());
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<form"));
        assert!(!html.contains(&content().confirmation_title));
    }

    /// Hands the section's signal back to the test
    #[derive(Clone, Default)]
    struct SubmissionSlot(Rc<Cell<Option<Signal<SubmissionState>>>>);

    fn section_root() -> Element {
        let submission = use_signal(SubmissionState::default);
        use_context::<SubmissionSlot>().0.set(Some(submission));
        rsx! { AppointmentSection { submission: submission } }
    }

    fn rerender(dom: &mut VirtualDom) -> String {
        dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn test_submit_then_reset_flips_view() {
        let slot = SubmissionSlot::default();
        let mut dom = VirtualDom::new(section_root)
            .with_root_context(Variant::Clinic.content())
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        let submission = slot.0.get().unwrap();
        let confirmation = content().confirmation_title;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<form"));
        assert!(!html.contains(&confirmation));

        dom.in_runtime(|| submit_request(submission));
        let html = rerender(&mut dom);
        assert!(!html.contains("<form"));
        assert!(html.contains(&confirmation));

        // A second submit changes nothing
        dom.in_runtime(|| submit_request(submission));
        assert_eq!(rerender(&mut dom), html);

        dom.in_runtime(|| book_another(submission));
        let html = rerender(&mut dom);
        assert!(html.contains("<form"));
        assert!(!html.contains(&confirmation));
        assert!(!html.contains("value="));
        assert_eq!(
            dom.in_runtime(|| *submission.peek()),
            SubmissionState::Pending
        );
    }
}
