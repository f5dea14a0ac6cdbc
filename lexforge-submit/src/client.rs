//! The submission client.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SubmitError, SubmitResult};

/// Configuration for the submission client.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Base URL of the curation backend.
    pub base_url: String,
    /// Timeout for one submission (ms).
    pub timeout_ms: u64,
}

impl SubmitConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// The server's answer to a successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveReceipt {
    /// Canonical entry id. For a `new-entry-` submission this replaces
    /// the client-temporary id.
    pub id: String,
}

/// Posts serialized entries to the curation backend.
pub struct SubmitClient {
    config: SubmitConfig,
    http: reqwest::Client,
}

impl SubmitClient {
    pub fn new(config: SubmitConfig) -> SubmitResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { config, http })
    }

    /// Submit one serialized `<entry>` fragment. Single attempt; the
    /// caller decides whether and when to retry.
    pub async fn save_entry(&self, entry_xml: &str) -> SubmitResult<SaveReceipt> {
        let url = format!("{}/api/v1/entries", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, bytes = entry_xml.len(), "submitting entry");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/xml")
            .body(entry_xml.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "server rejected entry");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: SaveReceipt = response.json().await?;
        debug!(id = %receipt.id, "entry accepted");
        Ok(receipt)
    }
}
