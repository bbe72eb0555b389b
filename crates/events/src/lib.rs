//! Change notification for Quillboard.
//!
//! Every successful mutation publishes a [`ChangeEvent`] on the
//! process-owned [`EventBus`]. The [`BackupSync`] service subscribes, folds
//! bursts of events through a [`Debouncer`], and signals the external
//! backup collaborator through a [`BackupTarget`] once the burst goes quiet.
//! Delivery failures are logged and never reach the mutating request.

pub mod backup;
pub mod bus;
pub mod debounce;
pub mod sync;

pub use backup::{BackupError, BackupSignal, BackupTarget, LogOnlyBackup, WebhookBackup};
pub use bus::{ChangeAction, ChangeEvent, EventBus};
pub use debounce::Debouncer;
pub use sync::BackupSync;
