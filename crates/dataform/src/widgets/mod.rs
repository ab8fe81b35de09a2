// File: src/widgets/mod.rs
// Purpose: Stateless Maud widgets, one per field type
//
// Widgets are plain prop structs implementing `maud::Render`. They never
// hold state; change/blur events are forwarded upward as htmx requests
// when `FieldEvents` are supplied.

pub mod button;
pub mod select;
pub mod text_area;
pub mod text_input;

pub use button::Button;
pub use select::SelectInput;
pub use text_area::TextAreaInput;
pub use text_input::TextInput;

use maud::{html, Markup};

/// Endpoints a widget forwards its change and blur events to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvents {
    pub change_url: String,
    pub blur_url: String,
}

impl FieldEvents {
    pub fn new(change_url: impl Into<String>, blur_url: impl Into<String>) -> Self {
        Self {
            change_url: change_url.into(),
            blur_url: blur_url.into(),
        }
    }

    /// Endpoints for field `index` under `base`, e.g. "/forms/1"
    pub fn for_field(base: &str, index: usize) -> Self {
        let base = base.trim_end_matches('/');
        Self::new(
            format!("{}/fields/{}/change", base, index),
            format!("{}/fields/{}/blur", base, index),
        )
    }
}

/// Class list of the wrapper around every input widget
pub(crate) fn wrapper_class(validation: Option<&str>) -> &'static str {
    if validation.is_some() {
        "input-wrapper input-wrapper-validation"
    } else {
        "input-wrapper"
    }
}

/// Inline warning shown under a control
pub(crate) fn validation_text(validation: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = validation {
            span class="field-validation-text" {
                span class="lnr lnr-warning" {}
                " " (message)
            }
        }
    }
}
