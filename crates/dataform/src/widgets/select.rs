// File: src/widgets/select.rs
// Purpose: Select (choice) widget

use maud::{html, Markup, Render};

use super::{validation_text, wrapper_class, FieldEvents};
use crate::field::SelectOption;

/// Labeled `<select>` control
///
/// Plain options render as `<option>text</option>`, labeled options carry an
/// explicit `value` attribute. The option matching `value` is `selected`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectInput<'a> {
    pub label: Option<&'a str>,
    pub name: &'a str,
    pub value: &'a str,
    pub options: &'a [SelectOption],
    pub validation: Option<&'a str>,
    pub events: Option<&'a FieldEvents>,
}

impl Render for SelectInput<'_> {
    fn render(&self) -> Markup {
        let change_url = self.events.map(|events| events.change_url.as_str());
        let blur_url = self.events.map(|events| events.blur_url.as_str());

        html! {
            div class=(wrapper_class(self.validation))
                hx-post=[blur_url]
                hx-trigger=[blur_url.map(|_| "focusout")] {
                label for=(self.name) {
                    @if let Some(label) = self.label {
                        span { (label) }
                    }
                    select id=(self.name)
                        name=(self.name)
                        hx-post=[change_url]
                        hx-trigger=[change_url.map(|_| "change")] {
                        @for choice in self.options {
                            @let is_selected = choice.value() == self.value;
                            @match choice {
                                SelectOption::Plain(text) => {
                                    option selected[is_selected] { (text) }
                                }
                                SelectOption::Labeled { value, label } => {
                                    option value=(value) selected[is_selected] { (label) }
                                }
                            }
                        }
                    }
                }
                (validation_text(self.validation))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![SelectOption::from("Red"), SelectOption::from(("g", "Green"))]
    }

    #[test]
    fn test_renders_plain_and_labeled_options() {
        let options = options();
        let html = SelectInput {
            label: Some("Color"),
            name: "color",
            value: "g",
            options: &options,
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains(r#"<select id="color" name="color">"#));
        assert!(html.contains("<option>Red</option>"));
        assert!(html.contains(r#"<option value="g" selected>Green</option>"#));
    }

    #[test]
    fn test_selects_plain_option_by_text() {
        let options = options();
        let html = SelectInput {
            name: "color",
            value: "Red",
            options: &options,
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains("<option selected>Red</option>"));
        assert!(html.contains(r#"<option value="g">Green</option>"#));
    }

    #[test]
    fn test_empty_options_render_empty_select() {
        let html = SelectInput {
            name: "color",
            validation: Some("Color can't be empty"),
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains(r#"<select id="color" name="color"></select>"#));
        assert!(html.contains("field-validation-text"));
    }
}
