//! Domain building blocks for the Quillboard writing organizer.
//!
//! Everything in this crate is storage- and transport-agnostic:
//!
//! - [`naming`] -- wire (camelCase) <-> storage (snake_case) key conversion.
//! - [`resource`] -- per-resource schema table, ownership paths and the
//!   field projector that turns client payloads into column assignments.
//! - [`ordering`] -- sort-order and z-index helpers.
//! - [`wishlist`] -- wishlist status flip.
//! - [`assets`] -- image MIME table and the on-disk blob store.

pub mod assets;
pub mod error;
pub mod naming;
pub mod ordering;
pub mod resource;
pub mod types;
pub mod wishlist;
