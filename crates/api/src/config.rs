use std::path::PathBuf;

use crate::auth::jwt::AuthConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bearer-token verification settings.
    pub auth: AuthConfig,
    /// Root directory for image blobs (default: `storage/assets`).
    pub asset_dir: PathBuf,
    /// Request body limit in bytes, sized for image uploads (default: 20 MiB).
    pub max_upload_bytes: usize,
    /// Backup collaborator endpoint. `None` logs signals instead.
    pub backup_webhook_url: Option<String>,
    /// Quiet period before a backup signal fires (default: `5000`).
    pub backup_debounce_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ASSET_DIR`            | `storage/assets`           |
    /// | `MAX_UPLOAD_BYTES`     | `20971520`                 |
    /// | `BACKUP_WEBHOOK_URL`   | --                         |
    /// | `BACKUP_DEBOUNCE_MS`   | `5000`                     |
    ///
    /// Auth variables are documented on [`AuthConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let asset_dir = PathBuf::from(
            std::env::var("ASSET_DIR").unwrap_or_else(|_| "storage/assets".into()),
        );

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "20971520".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let backup_webhook_url = std::env::var("BACKUP_WEBHOOK_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let backup_debounce_ms: u64 = std::env::var("BACKUP_DEBOUNCE_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("BACKUP_DEBOUNCE_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth: AuthConfig::from_env(),
            asset_dir,
            max_upload_bytes,
            backup_webhook_url,
            backup_debounce_ms,
        }
    }
}
