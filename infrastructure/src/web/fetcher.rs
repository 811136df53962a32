//! HTTP page source backed by the disk cache

use super::cache::PageCache;
use crate::config::FileSiteConfig;
use async_trait::async_trait;
use farlex_application::{FetchError, FetchedPage, PageSource};
use farlex_domain::PageId;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound for a single page request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`PageSource`] that serves pages from [`PageCache`] and downloads
/// missing ones with a plain GET.
pub struct CachedPageFetcher {
    client: reqwest::Client,
    cache: PageCache,
    base_url: String,
    user_agent: String,
    reject_error_status: bool,
}

impl CachedPageFetcher {
    pub fn new(cache: PageCache, site: &FileSiteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), cache, site)
    }

    pub fn with_client(client: reqwest::Client, cache: PageCache, site: &FileSiteConfig) -> Self {
        Self {
            client,
            cache,
            base_url: site.base_url.trim_end_matches('/').to_string(),
            user_agent: site.user_agent.clone(),
            reject_error_status: site.reject_error_status,
        }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    async fn download(&self, page: &PageId) -> Result<String, FetchError> {
        let url = self.page_url(page);
        info!("Fetching {}", url);

        let transport = |e: reqwest::Error| FetchError::Transport {
            page: page.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            if self.reject_error_status {
                return Err(FetchError::HttpStatus {
                    page: page.clone(),
                    status: status.as_u16(),
                });
            }
            warn!("{} answered {}; caching the body anyway", url, status);
        }

        let body = response.text().await.map_err(transport)?;
        debug!("Downloaded {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

#[async_trait]
impl PageSource for CachedPageFetcher {
    async fn fetch(&self, page: &PageId) -> Result<FetchedPage, FetchError> {
        if let Some(content) = self.cache.read(page).await? {
            return Ok(FetchedPage::cached(content));
        }

        let body = self.download(page).await?;
        self.cache.write(page, &body).await?;
        Ok(FetchedPage::fetched(body))
    }

    fn page_url(&self, page: &PageId) -> String {
        page.url(&self.base_url)
    }
}
