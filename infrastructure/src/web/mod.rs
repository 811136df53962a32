//! Page retrieval: local disk cache in front of an HTTP client
//!
//! ```text
//! CachedPageFetcher::fetch(page)
//!   ├─ PageCache::read  → hit  → FetchedPage::cached   (no network)
//!   └─ miss → GET <base>/<slug>.htm → PageCache::write → FetchedPage::fetched
//! ```

mod cache;
mod fetcher;

pub use cache::PageCache;
pub use fetcher::{CachedPageFetcher, REQUEST_TIMEOUT};
