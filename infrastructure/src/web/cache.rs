//! Disk cache of raw page bodies

use farlex_application::FetchError;
use farlex_domain::PageId;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding one `<slug>.htm` file per fetched page.
///
/// Entries never expire: a page present on disk is always served from
/// here, which is what makes re-runs cheap and offline-capable.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file of a page
    pub fn path_for(&self, page: &PageId) -> PathBuf {
        self.dir.join(page.cache_file_name())
    }

    /// Read a cached body; `Ok(None)` when the page was never stored
    pub async fn read(&self, page: &PageId) -> Result<Option<String>, FetchError> {
        let path = self.path_for(page);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Cache hit: {}", path.display());
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(cache_error(&path, e)),
        }
    }

    /// Store a body verbatim, creating the cache directory when needed
    pub async fn write(&self, page: &PageId, content: &str) -> Result<(), FetchError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| cache_error(&self.dir, e))?;

        let path = self.path_for(page);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| cache_error(&path, e))?;
        debug!("Cached {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}

fn cache_error(path: &Path, error: std::io::Error) -> FetchError {
    FetchError::Cache {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
