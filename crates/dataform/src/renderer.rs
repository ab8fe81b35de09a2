// File: src/renderer.rs
// Purpose: Render a DataForm to Maud markup, dispatching each field on its type

use maud::{html, Markup, PreEscaped, Render};
use tracing::warn;

use crate::controller::DataForm;
use crate::field::{FieldDescriptor, FieldType};
use crate::widgets::{Button, FieldEvents, SelectInput, TextAreaInput, TextInput};

/// Name of the HTML control for field `index`
///
/// Named fields use their name; unnamed fields get `field-<index>` so the
/// browser still posts their value back.
pub fn control_name(field: &FieldDescriptor, index: usize) -> String {
    if field.is_named() {
        field.name.clone()
    } else {
        format!("field-{}", index)
    }
}

/// Render one field with the widget matching its type
pub fn render_field(field: &FieldDescriptor, index: usize, events: Option<&FieldEvents>) -> Markup {
    let name = control_name(field, index);
    let label = Some(field.display_name.as_str()).filter(|label| !label.is_empty());
    let validation = field.error.as_deref();

    match &field.field_type {
        FieldType::TextInput => TextInput {
            label,
            name: &name,
            value: &field.value,
            placeholder: field.placeholder.as_deref(),
            validation,
            events,
            ..Default::default()
        }
        .render(),
        FieldType::SelectInput => SelectInput {
            label,
            name: &name,
            value: &field.value,
            options: &field.options,
            validation,
            events,
        }
        .render(),
        FieldType::TextAreaInput => TextAreaInput {
            label,
            name: &name,
            value: &field.value,
            placeholder: field.placeholder.as_deref(),
            validation,
            events,
            ..Default::default()
        }
        .render(),
        FieldType::Button => Button {
            label,
            ..Default::default()
        }
        .render(),
        FieldType::Unsupported(tag) => {
            warn!(field = index, field_type = %tag, "unsupported field type");
            html! { div { (tag) " not supported" } }
        }
    }
}

impl DataForm {
    /// Submit endpoint derived from the configured event base
    fn submit_url(&self) -> Option<String> {
        self.config
            .event_base
            .as_deref()
            .map(|base| format!("{}/submit", base.trim_end_matches('/')))
    }
}

impl Render for DataForm {
    fn render(&self) -> Markup {
        let config = &self.config;
        let class = Some(config.class_name.as_str()).filter(|class| !class.is_empty());
        let submit_url = self.submit_url();
        let swap = submit_url.as_ref().map(|_| "outerHTML");
        let target = submit_url.as_ref().map(|_| "this");

        html! {
            form class=[class]
                hx-post=[submit_url.as_deref()]
                hx-target=[target]
                hx-swap=[swap] {
                @if let Some(error) = &config.request_error {
                    div class="form-request-error" { (error) }
                }
                @for (index, field) in self.fields.iter().enumerate() {
                    @let events = config
                        .event_base
                        .as_deref()
                        .map(|base| FieldEvents::for_field(base, index));
                    (render_field(field, index, events.as_ref()))
                }
                (Button {
                    label: Some(config.submit_label.as_str()),
                    disabled: config.processing,
                    ..Default::default()
                })
                @if config.processing {
                    @match &config.loading_indicator {
                        Some(indicator) => { (PreEscaped(indicator)) }
                        None => { div { "Processing..." } }
                    }
                }
            }
        }
    }
}
