// File: src/config.rs
// Purpose: Form configuration parsing from TOML or JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::field::FieldDescriptor;

/// Everything a form needs except the submit handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfiguration {
    /// CSS class on the `<form>` element
    #[serde(default, alias = "class_name")]
    pub class_name: String,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Text of the submit button
    #[serde(default = "default_submit_label", alias = "submit_label")]
    pub submit_label: String,

    /// A request triggered by the form is in flight
    #[serde(default)]
    pub processing: bool,

    /// Error reported back by whatever handled the last submit
    #[serde(default, alias = "request_error")]
    pub request_error: Option<String>,

    /// Raw HTML shown while processing (default: "Processing...")
    #[serde(default, alias = "loading_indicator")]
    pub loading_indicator: Option<String>,

    /// URL prefix widgets post change/blur events to, e.g. "/fields"
    #[serde(default, alias = "event_base")]
    pub event_base: Option<String>,
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

impl Default for FormConfiguration {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            fields: Vec::new(),
            submit_label: default_submit_label(),
            processing: false,
            request_error: None,
            loading_indicator: None,
            event_base: None,
        }
    }
}

impl FormConfiguration {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn with_loading_indicator(mut self, html: impl Into<String>) -> Self {
        self.loading_indicator = Some(html.into());
        self
    }

    pub fn with_event_base(mut self, base: impl Into<String>) -> Self {
        self.event_base = Some(base.into());
        self
    }

    /// Parse a form from TOML (fields as `[[fields]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse form configuration as TOML")
    }

    /// Parse a form from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse form configuration as JSON")
    }

    /// Load a form from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file: {:?}", path))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        parsed.with_context(|| format!("Invalid form file: {:?}", path))
    }
}
