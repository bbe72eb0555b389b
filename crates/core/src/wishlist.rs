//! Shared wishlist rules: item status and creator attribution.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_OPEN: &str = "open";
pub const STATUS_DONE: &str = "done";

/// Creator name used when neither the payload nor the identity has one.
pub const ANONYMOUS_CREATOR: &str = "Anonymous";

/// A wishlist item is either open or done; nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistStatus {
    Open,
    Done,
}

impl WishlistStatus {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_OPEN => Ok(Self::Open),
            STATUS_DONE => Ok(Self::Done),
            other => Err(CoreError::Validation(format!(
                "Unknown wishlist status '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => STATUS_OPEN,
            Self::Done => STATUS_DONE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Done,
            Self::Done => Self::Open,
        }
    }
}

/// Name shown as an item's creator.
///
/// Prefers the name sent with the item, then the caller's email.
pub fn creator_name(requested: Option<&str>, email: Option<&str>) -> String {
    [requested, email]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS_CREATOR)
        .to_string()
}
