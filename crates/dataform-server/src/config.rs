// File: src/config.rs
// Purpose: Server configuration parsing from dataform.toml

use anyhow::{Context, Result};
use dataform::{FieldDescriptor, FormConfiguration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "DATAFORM_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// The form served at `/`
    #[serde(default = "default_form")]
    pub form: FormConfiguration,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Contact form served when no form is configured
fn default_form() -> FormConfiguration {
    FormConfiguration::new(vec![
        FieldDescriptor::text("name", "Name").with_validation("notEmpty"),
        FieldDescriptor::text("email", "Email")
            .with_placeholder("you@example.com")
            .with_validation("notEmpty"),
        FieldDescriptor::select(
            "topic",
            "Topic",
            [("general", "General"), ("billing", "Billing"), ("support", "Support")],
        ),
        FieldDescriptor::text_area("message", "Message").with_validation("notEmpty"),
    ])
    .with_class_name("contact-form")
    .with_submit_label("Send")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            form: default_form(),
        }
    }
}

impl Config {
    /// Load configuration from dataform.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from $DATAFORM_CONFIG or ./dataform.toml
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "dataform.toml".to_string());
        Self::load(path)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
