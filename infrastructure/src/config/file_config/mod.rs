//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated before any I/O happens.

mod paths;
mod politeness;
mod selectors;
mod site;

pub use paths::{FileCacheConfig, FileLoggingConfig, FileOutputConfig};
pub use politeness::FilePolitenessConfig;
pub use selectors::FileSelectorsConfig;
pub use site::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, FileSiteConfig};

use farlex_domain::PageId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("site.base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("site.user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("site.contents_page is not a valid page slug: {0:?}")]
    InvalidContentsPage(String),

    #[error("politeness.min_delay_secs ({min}) is greater than max_delay_secs ({max})")]
    InvalidDelayRange { min: u64, max: u64 },

    #[error("selectors.{field} cannot be empty")]
    EmptySelector { field: &'static str },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote site settings
    pub site: FileSiteConfig,
    /// Page cache settings
    pub cache: FileCacheConfig,
    /// CSV output settings
    pub output: FileOutputConfig,
    /// Delay between uncached fetches
    pub politeness: FilePolitenessConfig,
    /// Quiz markup selectors
    pub selectors: FileSelectorsConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let base_url = self.site.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.site.base_url.clone(),
            ));
        }
        if self.site.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUserAgent);
        }
        self.contents_page()?;

        let FilePolitenessConfig {
            min_delay_secs: min,
            max_delay_secs: max,
        } = self.politeness;
        if min > max {
            return Err(ConfigValidationError::InvalidDelayRange { min, max });
        }

        if self.selectors.quiz_container.trim().is_empty() {
            return Err(ConfigValidationError::EmptySelector {
                field: "quiz_container",
            });
        }
        if self.selectors.correct_class.trim().is_empty() {
            return Err(ConfigValidationError::EmptySelector {
                field: "correct_class",
            });
        }
        Ok(())
    }

    /// The configured table-of-contents page
    pub fn contents_page(&self) -> Result<PageId, ConfigValidationError> {
        PageId::new(self.site.contents_page.as_str()).map_err(|_| {
            ConfigValidationError::InvalidContentsPage(self.site.contents_page.clone())
        })
    }

    // ==================== Command-line overrides ====================

    pub fn with_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.cache.dir = dir;
        }
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output.dir = dir;
        }
        self
    }
}
