//! Typed rows and create DTOs.
//!
//! Create DTOs deserialize straight from wire-form (camelCase) request
//! bodies. Reads go through the generic scoped repository and are shaped
//! for the wire by `ResourceKind::shape_for_wire`, so only the rows the
//! service inspects field-by-field have a typed struct here.

pub mod book;
pub mod chapter;
pub mod character;
pub mod connection;
pub mod idea;
pub mod illustration;
pub mod image;
pub mod timeline_event;
pub mod wishlist;
