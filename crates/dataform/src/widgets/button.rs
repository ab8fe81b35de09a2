// File: src/widgets/button.rs
// Purpose: Button widget

use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, Default)]
pub struct Button<'a> {
    pub label: Option<&'a str>,
    pub class: Option<&'a str>,
    pub disabled: bool,
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="input-wrapper" {
                button class=[self.class] disabled[self.disabled] {
                    @if let Some(label) = self.label {
                        (label)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_button() {
        let html = Button {
            label: Some("Send"),
            ..Default::default()
        }
        .render()
        .into_string();
        assert_eq!(html, r#"<div class="input-wrapper"><button>Send</button></div>"#);
    }

    #[test]
    fn test_disabled_button_with_class() {
        let html = Button {
            label: Some("Send"),
            class: Some("primary"),
            disabled: true,
        }
        .render()
        .into_string();
        assert_eq!(
            html,
            r#"<div class="input-wrapper"><button class="primary" disabled>Send</button></div>"#
        );
    }
}
