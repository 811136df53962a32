//! Configuration file loading for farlex-quizzes
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FARLEX_*` environment variables (`FARLEX_SITE__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./farlex.toml` or `./.farlex.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/farlex-quizzes/config.toml`
//! 5. Fallback: `~/.config/farlex-quizzes/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, FileCacheConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FilePolitenessConfig, FileSelectorsConfig,
    FileSiteConfig,
};
pub use loader::ConfigLoader;
