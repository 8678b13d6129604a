//! Tile-server reachability probe.
//!
//! The map front-end picks its tile provider from a candidate list; a
//! candidate only qualifies if it answers within a bounded timeout. This is
//! a resource-availability check, not a cancellable core operation: the
//! commune dataset fetch deliberately has no such timeout.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Error type for probe construction.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

/// Probes candidate tile servers with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct TileServerProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl TileServerProbe {
    /// Create a probe with the given per-candidate timeout.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("communefinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    /// Whether a server answers at all within the timeout.
    ///
    /// Any HTTP response counts as reachable; only connection failures and
    /// timeouts disqualify a candidate, since tile servers commonly answer
    /// probe paths with redirects or 4xx.
    pub async fn is_reachable(&self, url: &str) -> bool {
        match tokio::time::timeout(self.timeout, self.client.get(url).send()).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(url, error = %e, "Tile server probe failed");
                false
            }
            Err(_) => {
                debug!(url, timeout_ms = self.timeout.as_millis() as u64, "Tile server probe timed out");
                false
            }
        }
    }

    /// The first reachable candidate, in list order.
    pub async fn first_reachable<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        for url in candidates {
            if self.is_reachable(url).await {
                return Some(url);
            }
        }
        None
    }
}
