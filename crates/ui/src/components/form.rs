//! # Form Components
//!
//! Labeled inputs for the appointment form.
//!
//! The inputs are uncontrolled: their values live only in the DOM and are
//! never read back. The browser's native constraints (`required`, `type`)
//! are the only validation.

use clinic_content::Icon;
use dioxus::prelude::*;

/// Label wrapping one form control
#[component]
pub fn FormGroup(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: "form-label",
                "{label}"
                {children}
            }
        }
    }
}

/// Properties for FormInput component
#[derive(Props, Clone, PartialEq)]
pub struct FormInputProps {
    /// Field name
    pub name: String,

    /// Input type (text, tel, email, date)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Icon drawn inside the input on the left
    #[props(default)]
    pub icon: Option<Icon>,

    /// Whether the browser should require a value
    #[props(default = true)]
    pub required: bool,
}

/// Single-line input with an optional leading icon
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let padded = if props.icon.is_some() {
        "form-input has-icon"
    } else {
        "form-input"
    };
    let glyph = props.icon.map(|icon| icon.glyph());

    rsx! {
        div {
            class: "form-input-wrapper",
            if let Some(glyph) = glyph {
                span { class: "form-input-icon", "{glyph}" }
            }
            input {
                class: "{padded}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
            }
        }
    }
}

/// Multi-line free text input
#[component]
pub fn FormTextArea(
    name: String,
    #[props(default = 4)] rows: usize,
    #[props(default)] placeholder: Option<String>,
) -> Element {
    rsx! {
        textarea {
            class: "form-input",
            name: "{name}",
            rows: "{rows}",
            placeholder: placeholder.as_deref().unwrap_or(""),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_is_required_by_default() {
        let html = dioxus_ssr::render_element(rsx! {
            FormInput { name: "email", input_type: "email", icon: Icon::Mail }
        });
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("required"));
        assert!(html.contains("has-icon"));
    }

    #[test]
    fn test_form_group_labels_child() {
        let html = dioxus_ssr::render_element(rsx! {
            FormGroup {
                label: "Full Name",
                FormInput { name: "name", required: false }
            }
        });
        assert!(html.contains("Full Name"));
        assert!(html.contains("name=\"name\""));
    }

    #[test]
    fn test_textarea_rows() {
        let html = dioxus_ssr::render_element(rsx! {
            FormTextArea { name: "reason", rows: 6 }
        });
        assert!(html.contains("rows=\"6\""));
    }
}
