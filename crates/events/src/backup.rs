//! Backup collaborator interface.
//!
//! The backup service decides on its own what and when to sync; all it
//! needs from us is a "mutation occurred" signal. [`WebhookBackup`] sends
//! that signal as one HTTP POST; [`LogOnlyBackup`] is used when no endpoint
//! is configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bus::{ChangeAction, ChangeEvent};

/// HTTP request timeout for a single signal.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// One debounced "mutation occurred" notification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSignal {
    /// Always `"mutation"`.
    pub event: &'static str,
    /// Number of mutations collapsed into this signal.
    pub count: usize,
    pub last_entity: Option<String>,
    pub last_action: Option<ChangeAction>,
    pub signalled_at: DateTime<Utc>,
}

impl BackupSignal {
    pub fn new(count: usize, last: Option<&ChangeEvent>) -> Self {
        Self {
            event: "mutation",
            count,
            last_entity: last.map(|e| e.entity.clone()),
            last_action: last.map(|e| e.action),
            signalled_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Backup endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// Receiver of debounced backup signals.
#[async_trait]
pub trait BackupTarget: Send + Sync {
    async fn notify(&self, signal: &BackupSignal) -> Result<(), BackupError>;
}

/// Posts each signal as JSON to a fixed URL. No retries.
pub struct WebhookBackup {
    client: reqwest::Client,
    url: String,
}

impl WebhookBackup {
    pub fn new(url: impl Into<String>) -> Result<Self, BackupError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
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
impl BackupTarget for WebhookBackup {
    async fn notify(&self, signal: &BackupSignal) -> Result<(), BackupError> {
        let response = self.client.post(&self.url).json(signal).send().await?;
        if !response.status().is_success() {
            return Err(BackupError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Used when no backup endpoint is configured.
#[derive(Debug, Default)]
pub struct LogOnlyBackup;

#[async_trait]
impl BackupTarget for LogOnlyBackup {
    async fn notify(&self, signal: &BackupSignal) -> Result<(), BackupError> {
        tracing::info!(
            count = signal.count,
            last_entity = ?signal.last_entity,
            "Backup signal (no backup endpoint configured)"
        );
        Ok(())
    }
}
