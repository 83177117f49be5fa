//! Job Feed Client
//!
//! Downloads the public job feed with a single GET and normalizes the
//! postings into `common::Job` records. No caching, no retries, no paging.

use std::time::Duration;

use async_trait::async_trait;
use common::Job;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};

pub mod normalize;

pub use normalize::{normalize_feed, normalize_job};

pub const DEFAULT_FEED_URL: &str = "https://empllo.com/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed returned HTTP {status}")]
    Http { status: u16 },

    #[error("unrecognized feed format: {0}")]
    Format(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// The one notification shown to the user, whatever went wrong.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Http { status } => {
                format!("The job feed answered with HTTP {status}. Please try again.")
            }
            FetchError::Format(_) => {
                "The job feed sent data we could not read. Please try again.".to_string()
            }
            FetchError::Network(_) => {
                "Could not reach the job feed. Check your connection and try again.".to_string()
            }
        }
    }
}

/// Anything that can produce a fresh list of jobs.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError>;
}

/// HTTP client for the job feed endpoint.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError> {
        info!(url = %self.url, "fetching job feed");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "job feed request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| FetchError::Format(format!("body is not JSON: {e}")))?;

        let jobs = normalize_feed(value)?;
        info!(count = jobs.len(), bytes = body.len(), "job feed loaded");
        Ok(jobs)
    }
}
