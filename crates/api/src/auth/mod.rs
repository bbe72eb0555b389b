//! Authentication primitives.
//!
//! - [`jwt`] -- validation of identity-provider bearer tokens.

pub mod jwt;
