//! Directory configuration from TOML (`[cache]` and `[output]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw page cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Directory holding one `<slug>.htm` file per fetched page
    pub dir: PathBuf,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("pages"),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory receiving the CSV files
    pub dir: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("quizzes"),
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write log events to this file
    pub file: Option<PathBuf>,
}
