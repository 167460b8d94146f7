//! UI Configuration
//!
//! Optional overrides read from a JSON `<script>` element in `index.html`.

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "todo-flow-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page text and log level
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Header title, also used in the footer and document title
    pub title: String,
    pub tagline: String,
    /// Placeholder of the new-todo input
    pub placeholder: String,
    /// Max level for console logging ("error" .. "trace")
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todo-Flow".to_string(),
            tagline: "Organize your life, one task at a time.".to_string(),
            placeholder: "Add a new todo...".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read overrides from the page. A missing element means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Configured log level, `INFO` when unparseable
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
