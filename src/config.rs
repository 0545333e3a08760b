// src/config.rs
use serde::Deserialize;

/// Page settings, optionally embedded in index.html as
/// `<script id="converter-config" type="application/json">`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    /// How long the Copy button shows "Copied!".
    pub copied_reset_ms: u32,
    pub title: String,
    pub placeholder: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            copied_reset_ms: 2000,
            title: "GitHub Pages URL Converter".to_string(),
            placeholder: "Enter GitHub Repo URL(https://github.com/username/repo)".to_string(),
        }
    }
}

impl ConverterConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
