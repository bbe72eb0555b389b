//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the verified caller, from a bearer token or the
//!   development header fallback.

pub mod auth;
