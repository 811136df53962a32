//! Uniformly random whole-second pauses

use crate::config::FilePolitenessConfig;
use async_trait::async_trait;
use farlex_application::Pacer;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// [`Pacer`] sleeping a random number of seconds in `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPacer {
    min_secs: u64,
    max_secs: u64,
}

impl RandomPacer {
    /// Bounds are reordered when given backwards
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self {
            min_secs: min_secs.min(max_secs),
            max_secs: min_secs.max(max_secs),
        }
    }

    pub fn from_config(config: &FilePolitenessConfig) -> Self {
        Self::new(config.min_delay_secs, config.max_delay_secs)
    }

    /// Draw the next pause length
    pub fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }
}

#[async_trait]
impl Pacer for RandomPacer {
    async fn pause(&self) -> Duration {
        let delay = self.next_delay();
        if !delay.is_zero() {
            debug!("Sleeping {:?} before the next request", delay);
            tokio::time::sleep(delay).await;
        }
        delay
    }
}
