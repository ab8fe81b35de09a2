// File: src/widgets/text_area.rs
// Purpose: Multi-line text widget

use maud::{html, Markup, Render};

use super::{validation_text, wrapper_class, FieldEvents};

/// Labeled `<textarea>` control
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAreaInput<'a> {
    pub label: Option<&'a str>,
    pub name: &'a str,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub class: Option<&'a str>,
    pub validation: Option<&'a str>,
    pub events: Option<&'a FieldEvents>,
}

impl Render for TextAreaInput<'_> {
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
                    textarea id=(self.name)
                        name=(self.name)
                        placeholder=[self.placeholder]
                        autocomplete="off"
                        class=[self.class]
                        hx-post=[change_url]
                        hx-trigger=[change_url.map(|_| "change")] {
                        (self.value)
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

    #[test]
    fn test_value_is_element_content() {
        let html = TextAreaInput {
            label: Some("Bio"),
            name: "bio",
            value: "Hello <world>",
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains(r#"<textarea id="bio" name="bio" autocomplete="off">Hello &lt;world&gt;</textarea>"#));
        assert!(html.contains("<span>Bio</span>"));
    }

    #[test]
    fn test_validation_wrapper() {
        let html = TextAreaInput {
            name: "bio",
            validation: Some("Bio is required"),
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains(r#"class="input-wrapper input-wrapper-validation""#));
        assert!(html.contains("Bio is required"));
    }
}
