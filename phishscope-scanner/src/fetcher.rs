use crate::error::Result;
use crate::inspect::PageInspector;
use crate::result::ContentReport;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Bytes of a response body kept for inspection; the rest is dropped.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Sites routinely refuse or cloak requests without a browser user agent.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetches a page once and turns its markup into [`ContentReport`] signals.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    inspector: PageInspector,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            BROWSER_USER_AGENT,
        )
    }

    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            inspector: PageInspector::new()?,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Single attempt, bounded by the client timeout. Never panics; every
    /// failure becomes [`ContentReport::Failed`].
    pub async fn fetch(&self, url: &str) -> ContentReport {
        match self.fetch_body(url).await {
            Ok(body) => ContentReport::Fetched(self.inspector.inspect(&body, url)),
            Err(e) => {
                warn!("Content fetch failed for {}: {}", url, e);
                ContentReport::failed(e.to_string())
            }
        }
    }

    async fn fetch_body(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let mut response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let room = MAX_BODY_BYTES - bytes.len();
            if chunk.len() >= room {
                bytes.extend_from_slice(&chunk[..room]);
                debug!("Body of {} truncated at {} bytes", url, MAX_BODY_BYTES);
                break;
            }
            bytes.extend_from_slice(&chunk);
        }
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            "Fetched {} (status {}, {} bytes in {:?})",
            url,
            status,
            body.len(),
            start.elapsed()
        );
        Ok(body)
    }
}
