// File: src/field.rs
// Purpose: Field descriptors - the schema a form is rendered from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget kind a descriptor asks for
///
/// Parsed from the descriptor's `type` tag. Tags the renderer does not know
/// are kept as [`FieldType::Unsupported`] so the form can still render a
/// placeholder for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    TextInput,
    SelectInput,
    TextAreaInput,
    Button,
    Unsupported(String),
}

impl FieldType {
    /// The tag as it appears in a descriptor
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::TextInput => "TextInput",
            FieldType::SelectInput => "SelectInput",
            FieldType::TextAreaInput => "TextAreaInput",
            FieldType::Button => "Button",
            FieldType::Unsupported(tag) => tag,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldType::Unsupported(_))
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "TextInput" => FieldType::TextInput,
            "SelectInput" => FieldType::SelectInput,
            "TextAreaInput" => FieldType::TextAreaInput,
            "Button" => FieldType::Button,
            other => FieldType::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        FieldType::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select's option list
///
/// Either a bare string (used as both value and label) or a value with a
/// separate label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    Plain(String),
    Labeled {
        value: String,
        #[serde(alias = "option")]
        label: String,
    },
}

impl SelectOption {
    /// Value submitted when this option is chosen
    pub fn value(&self) -> &str {
        match self {
            SelectOption::Plain(value) => value,
            SelectOption::Labeled { value, .. } => value,
        }
    }

    /// Text shown to the user
    pub fn label(&self) -> &str {
        match self {
            SelectOption::Plain(value) => value,
            SelectOption::Labeled { label, .. } => label,
        }
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        SelectOption::Plain(value.to_string())
    }
}

impl From<(&str, &str)> for SelectOption {
    fn from((value, label): (&str, &str)) -> Self {
        SelectOption::Labeled {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Description of a single form field and its current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Key in the submitted mapping; empty means the field is not submitted
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Name of the validation rule, e.g. `notEmpty`
    #[serde(default, alias = "validationRule", skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

impl FieldDescriptor {
    /// Create a descriptor with an empty value and no rule
    pub fn new(
        field_type: impl Into<FieldType>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            field_type: field_type.into(),
            name: name.into(),
            display_name: display_name.into(),
            value: String::new(),
            error: None,
            options: Vec::new(),
            placeholder: None,
            validation: None,
        }
    }

    pub fn text(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(FieldType::TextInput, name, display_name)
    }

    pub fn text_area(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(FieldType::TextAreaInput, name, display_name)
    }

    pub fn select<O>(
        name: impl Into<String>,
        display_name: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self
    where
        O: Into<SelectOption>,
    {
        let mut field = Self::new(FieldType::SelectInput, name, display_name);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_validation(mut self, rule: impl Into<String>) -> Self {
        self.validation = Some(rule.into());
        self
    }

    /// Whether the field appears in the submitted mapping
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Value of the first option, used as the default for selects
    pub fn first_option_value(&self) -> Option<&str> {
        self.options.first().map(SelectOption::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_type_round_trip_tags() {
        assert_eq!(FieldType::from("TextInput"), FieldType::TextInput);
        assert_eq!(FieldType::from("SelectInput"), FieldType::SelectInput);
        assert_eq!(
            FieldType::from("DatePicker"),
            FieldType::Unsupported("DatePicker".to_string())
        );
        assert_eq!(FieldType::from("DatePicker").to_string(), "DatePicker");
        assert!(!FieldType::from("DatePicker").is_supported());
    }

    #[test]
    fn test_deserialize_descriptor_from_json() {
        let json = r#"{
            "type": "SelectInput",
            "name": "country",
            "displayName": "Country",
            "options": ["PT", {"value": "es", "option": "Spain"}],
            "validationRule": "notEmpty"
        }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(field.field_type, FieldType::SelectInput);
        assert_eq!(field.display_name, "Country");
        assert_eq!(field.value, "");
        assert_eq!(field.validation.as_deref(), Some("notEmpty"));
        assert_eq!(
            field.options,
            vec![SelectOption::from("PT"), SelectOption::from(("es", "Spain"))]
        );
    }

    #[test]
    fn test_select_option_value_and_label() {
        let plain = SelectOption::from("red");
        assert_eq!(plain.value(), "red");
        assert_eq!(plain.label(), "red");

        let labeled = SelectOption::from(("r", "Red"));
        assert_eq!(labeled.value(), "r");
        assert_eq!(labeled.label(), "Red");
    }

    #[test]
    fn test_builder_helpers() {
        let field = FieldDescriptor::text("email", "Email")
            .with_placeholder("you@example.com")
            .with_validation("notEmpty");
        assert!(field.is_named());
        assert!(!field.has_error());
        assert_eq!(field.placeholder.as_deref(), Some("you@example.com"));

        let unnamed = FieldDescriptor::text("", "Note");
        assert!(!unnamed.is_named());
    }
}
