//! Site configuration from TOML (`[site]` section)

use serde::{Deserialize, Serialize};

/// Default host serving the grammar book
pub const DEFAULT_BASE_URL: &str = "https://www.thefreedictionary.com";

/// Browser-like client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Raw site configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSiteConfig {
    /// Scheme and host the page slugs are resolved against
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Slug of the table-of-contents page
    pub contents_page: String,
    /// Treat non-2xx responses as fatal instead of caching their body
    pub reject_error_status: bool,
}

impl Default for FileSiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            contents_page: farlex_application::DEFAULT_CONTENTS_PAGE.to_string(),
            reject_error_status: false,
        }
    }
}
