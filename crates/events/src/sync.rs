//! Debounced backup trigger service.
//!
//! [`BackupSync`] subscribes to the [`EventBus`](crate::bus::EventBus) and
//! turns a stream of [`ChangeEvent`]s into at most one [`BackupSignal`] per
//! quiet period. It runs as a long-lived background task and flushes any
//! pending signal before it exits.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::backup::{BackupSignal, BackupTarget};
use crate::bus::ChangeEvent;
use crate::debounce::{sleep_until_deadline, Debouncer};

/// Background service that forwards debounced mutation signals.
pub struct BackupSync {
    target: Arc<dyn BackupTarget>,
    debouncer: Debouncer,
    last_event: Option<ChangeEvent>,
}

impl BackupSync {
    pub fn new(target: Arc<dyn BackupTarget>, window: Duration) -> Self {
        Self {
            target,
            debouncer: Debouncer::new(window),
            last_event: None,
        }
    }

    /// Run the debounce loop.
    ///
    /// Exits when `cancel` fires or the bus is dropped. Either way a
    /// pending signal is sent before returning.
    pub async fn run(
        mut self,
        mut receiver: broadcast::Receiver<ChangeEvent>,
        cancel: CancellationToken,
    ) {
        tracing::info!(
            window_ms = self.debouncer.window().as_millis() as u64,
            "Backup sync started"
        );

        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Backup sync cancelled, flushing");
                    self.flush().await;
                    break;
                }
                received = receiver.recv() => match received {
                    Ok(event) => {
                        self.last_event = Some(event);
                        self.debouncer.trigger();
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Backup sync lagged");
                        self.debouncer.trigger();
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Event bus closed, backup sync shutting down");
                        self.flush().await;
                        break;
                    }
                },
                _ = sleep_until_deadline(deadline), if deadline.is_some() => {
                    self.flush().await;
                }
            }
        }
    }

    /// Send the pending signal, if any. Failures are logged and dropped.
    async fn flush(&mut self) {
        let Some(count) = self.debouncer.take() else {
            return;
        };
        let signal = BackupSignal::new(count, self.last_event.take().as_ref());

        match self.target.notify(&signal).await {
            Ok(()) => tracing::debug!(count, "Backup signal sent"),
            Err(e) => tracing::error!(error = %e, count, "Backup signal failed"),
        }
    }
}
