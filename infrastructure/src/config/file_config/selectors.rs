//! Markup selector configuration from TOML (`[selectors]` section)

use serde::{Deserialize, Serialize};

/// Raw selector configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectorsConfig {
    /// CSS selector of the element wrapping a page's quiz
    pub quiz_container: String,
    /// Class marking the radio input of the correct choice
    pub correct_class: String,
}

impl Default for FileSelectorsConfig {
    fn default() -> Self {
        Self {
            quiz_container: "#quiz".to_string(),
            correct_class: "cr".to_string(),
        }
    }
}
