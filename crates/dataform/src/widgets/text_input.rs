// File: src/widgets/text_input.rs
// Purpose: Single-line text input widget

use maud::{html, Markup, Render};

use super::{validation_text, wrapper_class, FieldEvents};

/// Labeled `<input>` control
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput<'a> {
    pub label: Option<&'a str>,
    pub name: &'a str,
    /// HTML input type (default: "text")
    pub input_type: Option<&'a str>,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub class: Option<&'a str>,
    pub validation: Option<&'a str>,
    pub events: Option<&'a FieldEvents>,
}

impl Render for TextInput<'_> {
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
                    input id=(self.name)
                        name=(self.name)
                        type=(self.input_type.unwrap_or("text"))
                        value=(self.value)
                        placeholder=[self.placeholder]
                        autocomplete="off"
                        class=[self.class]
                        hx-post=[change_url]
                        hx-trigger=[change_url.map(|_| "change")];
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
    fn test_renders_labeled_input() {
        let html = TextInput {
            label: Some("Email"),
            name: "email",
            value: "a@b.c",
            placeholder: Some("you@example.com"),
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.starts_with(r#"<div class="input-wrapper">"#));
        assert!(html.contains(r#"<label for="email"><span>Email</span>"#));
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"value="a@b.c""#));
        assert!(html.contains(r#"placeholder="you@example.com""#));
        assert!(html.contains(r#"autocomplete="off""#));
        assert!(!html.contains("field-validation-text"));
        assert!(!html.contains("hx-post"));
    }

    #[test]
    fn test_renders_validation_message() {
        let html = TextInput {
            name: "email",
            validation: Some("Email can't be empty"),
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains("input-wrapper-validation"));
        assert!(html.contains("Email can't be empty"));
        assert!(!html.contains("<span>"), "no label span without a label");
    }

    #[test]
    fn test_forwards_events() {
        let events = FieldEvents::for_field("", 3);
        let html = TextInput {
            name: "city",
            input_type: Some("search"),
            events: Some(&events),
            ..Default::default()
        }
        .render()
        .into_string();

        assert!(html.contains(r#"hx-post="/fields/3/blur" hx-trigger="focusout""#));
        assert!(html.contains(r#"hx-post="/fields/3/change" hx-trigger="change""#));
        assert!(html.contains(r#"type="search""#));
    }
}
