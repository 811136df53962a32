//! Politeness configuration from TOML (`[politeness]` section)

use serde::{Deserialize, Serialize};

/// Raw politeness configuration from TOML
///
/// After every page that needed a network fetch the scraper sleeps a
/// whole number of seconds drawn uniformly from `min..=max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePolitenessConfig {
    pub min_delay_secs: u64,
    pub max_delay_secs: u64,
}

impl Default for FilePolitenessConfig {
    fn default() -> Self {
        Self {
            min_delay_secs: 1,
            max_delay_secs: 5,
        }
    }
}
