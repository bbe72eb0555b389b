//! Bearer-token validation.
//!
//! Identity is issued by an external provider as HS256-signed JWTs. This
//! service only verifies them: signature, expiry and (optionally) issuer.
//! When no secret is configured the server runs in local development mode
//! and the [`AuthUser`](crate::middleware::auth::AuthUser) extractor falls
//! back to plain request headers.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use quillboard_core::types::UserId;
use serde::{Deserialize, Serialize};

/// JWT claims read from an identity-provider token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider's user id.
    pub sub: UserId,
    /// Display email, when the provider includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Claims for `sub` expiring `ttl_secs` from now.
    pub fn new(sub: impl Into<UserId>, email: Option<String>, ttl_secs: i64) -> Self {
        Self {
            sub: sub.into(),
            email,
            exp: chrono::Utc::now().timestamp() + ttl_secs,
            iss: None,
        }
    }
}

/// Token verification settings.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret shared with the identity provider. `None` enables
    /// the development header fallback.
    pub jwt_secret: Option<String>,
    /// Required `iss` claim, if set.
    pub jwt_issuer: Option<String>,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `AUTH_JWT_SECRET` | no       | --      |
    /// | `AUTH_JWT_ISSUER` | no       | --      |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            jwt_secret: non_empty("AUTH_JWT_SECRET"),
            jwt_issuer: non_empty("AUTH_JWT_ISSUER"),
        }
    }

    /// Whether requests may identify themselves with plain headers.
    pub fn is_dev_mode(&self) -> bool {
        self.jwt_secret.is_none()
    }
}

/// Sign `claims` with `secret` (HS256).
///
/// The server never issues tokens in production; this exists for local
/// tooling and tests.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode a bearer token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    secret: &str,
    issuer: Option<&str>,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
        validation.required_spec_claims.insert("iss".to_string());
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
