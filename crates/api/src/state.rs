use std::sync::Arc;

use quillboard_core::assets::LocalAssetStore;
use quillboard_core::resource::ResourceKind;
use quillboard_core::types::DbId;
use quillboard_events::{ChangeAction, ChangeEvent, EventBus};

use crate::config::ServerConfig;
use crate::middleware::auth::AuthUser;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quillboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Change notification bus feeding the backup sync service.
    pub event_bus: Arc<EventBus>,
    /// On-disk image blob store.
    pub assets: Arc<LocalAssetStore>,
}

impl AppState {
    /// Announce a successful mutation. Never blocks or fails.
    pub fn notify_change(
        &self,
        kind: ResourceKind,
        id: DbId,
        action: ChangeAction,
        user: &AuthUser,
    ) {
        tracing::info!(
            entity = kind.entity_name(),
            %id,
            ?action,
            user_id = %user.user_id,
            "Mutation"
        );
        self.event_bus.publish(
            ChangeEvent::new(kind.entity_name(), action)
                .with_id(id)
                .with_actor(user.user_id.clone()),
        );
    }
}
