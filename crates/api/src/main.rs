use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use quillboard_core::assets::LocalAssetStore;
use quillboard_events::{BackupSync, BackupTarget, EventBus, LogOnlyBackup, WebhookBackup};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quillboard_api::config::ServerConfig;
use quillboard_api::router::build_app_router;
use quillboard_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quillboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        dev_auth = config.auth.is_dev_mode(),
        "Loaded server configuration"
    );
    if config.auth.is_dev_mode() {
        tracing::warn!("AUTH_JWT_SECRET not set, trusting x-user-id headers (development only)");
    }

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = quillboard_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    quillboard_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    quillboard_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Asset store ---
    tokio::fs::create_dir_all(&config.asset_dir)
        .await
        .expect("Failed to create asset directory");
    let assets = Arc::new(LocalAssetStore::new(config.asset_dir.clone()));
    tracing::info!(asset_dir = %config.asset_dir.display(), "Asset store ready");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // Spawn backup sync (debounced "mutation occurred" signals).
    let backup_target: Arc<dyn BackupTarget> = match &config.backup_webhook_url {
        Some(url) => Arc::new(
            WebhookBackup::new(url.clone()).expect("Failed to build backup HTTP client"),
        ),
        None => Arc::new(LogOnlyBackup),
    };
    let backup_cancel = CancellationToken::new();
    let backup_sync = BackupSync::new(
        backup_target,
        Duration::from_millis(config.backup_debounce_ms),
    );
    let backup_handle = tokio::spawn(backup_sync.run(event_bus.subscribe(), backup_cancel.clone()));
    tracing::info!(
        webhook = config.backup_webhook_url.is_some(),
        "Backup sync started"
    );

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
        assets,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Flush any pending backup signal.
    backup_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(15), backup_handle).await;
    tracing::info!("Backup sync stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
