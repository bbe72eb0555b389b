//! HTTP handlers, one module per resource.
//!
//! [`scoped`] holds the generic get/update/delete/list/reorder handlers;
//! the per-resource modules add creation and resource-specific extras.

pub mod books;
pub mod chapters;
pub mod characters;
pub mod connections;
pub mod ideas;
pub mod illustrations;
pub mod images;
pub mod me;
pub mod scoped;
pub mod timeline;
pub mod wishlist;
