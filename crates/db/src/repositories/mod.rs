//! Repositories.
//!
//! [`ScopedRepo`] is the single implementation of ownership-checked reads,
//! projected updates and deletes for every resource kind. The per-resource
//! repositories only cover creation, where each kind has its own defaults.
//! [`OrderingRepo`] maintains `sort_order` and `z_index`.

pub mod book_repo;
pub mod chapter_repo;
pub mod character_repo;
pub mod connection_repo;
pub mod idea_repo;
pub mod illustration_repo;
pub mod image_repo;
pub mod ordering_repo;
pub mod scoped_repo;
pub mod timeline_event_repo;
pub mod wishlist_repo;

pub use book_repo::BookRepo;
pub use chapter_repo::ChapterRepo;
pub use character_repo::CharacterRepo;
pub use connection_repo::ConnectionRepo;
pub use idea_repo::IdeaRepo;
pub use illustration_repo::IllustrationRepo;
pub use image_repo::ImageRepo;
pub use ordering_repo::OrderingRepo;
pub use scoped_repo::{Row, ScopedRepo};
pub use timeline_event_repo::TimelineEventRepo;
pub use wishlist_repo::WishlistRepo;
