//! Politeness pacing port

use async_trait::async_trait;
use std::time::Duration;

/// Enforces a pause between consecutive network fetches
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Sleep for one politeness interval and report how long it was
    async fn pause(&self) -> Duration;
}

/// Pacer that never sleeps
pub struct NoPause;

#[async_trait]
impl Pacer for NoPause {
    async fn pause(&self) -> Duration {
        Duration::ZERO
    }
}
