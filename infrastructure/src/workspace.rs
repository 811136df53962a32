//! Working directories of a run

use crate::config::FileConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[error("Cannot create {role} directory {path}: {source}")]
pub struct WorkspaceError {
    pub role: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Page cache and CSV output directories, created once before any page is processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Workspace {
    pub fn new(cache_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        Self::new(&config.cache.dir, &config.output.dir)
    }

    /// Create both directories if absent
    pub fn prepare(&self) -> Result<(), WorkspaceError> {
        ensure_dir("cache", &self.cache_dir)?;
        ensure_dir("output", &self.output_dir)?;
        Ok(())
    }
}

fn ensure_dir(role: &'static str, path: &Path) -> Result<(), WorkspaceError> {
    std::fs::create_dir_all(path).map_err(|source| WorkspaceError {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Using {} directory {}", role, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().join("pages"), dir.path().join("out/csv"));

        workspace.prepare().unwrap();

        assert!(workspace.cache_dir.is_dir());
        assert!(workspace.output_dir.is_dir());
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().join("pages"), dir.path().join("quizzes"));

        workspace.prepare().unwrap();
        workspace.prepare().unwrap();
    }

    #[test]
    fn test_prepare_fails_on_file_in_the_way() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("pages");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = Workspace::new(&blocker, dir.path().join("quizzes"))
            .prepare()
            .unwrap_err();

        assert_eq!(err.role, "cache");
    }

    #[test]
    fn test_from_config_defaults() {
        let workspace = Workspace::from_config(&FileConfig::default());
        assert_eq!(workspace, Workspace::new("pages", "quizzes"));
    }
}
