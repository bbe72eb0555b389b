//! Sibling ordering rules.
//!
//! Two flavours of order exist:
//!
//! - `sort_order`: an explicit position rewritten wholesale by a reorder
//!   call. Positions are 0-based list indices.
//! - `z_index`: a per-book stacking counter; "bring to front" assigns
//!   `MAX(z_index) + 1` among the siblings.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Position given to the first record under an empty parent.
pub const FIRST_POSITION: i32 = 0;

/// Upper bound on a single reorder request.
pub const MAX_REORDER_LEN: usize = 10_000;

/// The position that places a record after (or above) every sibling.
pub fn next_position(current_max: Option<i32>) -> i32 {
    match current_max {
        Some(max) => max.saturating_add(1),
        None => FIRST_POSITION,
    }
}

/// Validate a full ordered id list and pair each id with its new position.
///
/// Rejects duplicate ids and oversized lists before anything is written.
pub fn positions(ids: &[DbId]) -> Result<Vec<(DbId, i32)>, CoreError> {
    if ids.len() > MAX_REORDER_LEN {
        return Err(CoreError::Validation(format!(
            "Reorder list too long ({} > {MAX_REORDER_LEN})",
            ids.len()
        )));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "Duplicate id {id} in reorder list"
            )));
        }
    }

    Ok(ids
        .iter()
        .zip(FIRST_POSITION..)
        .map(|(id, pos)| (*id, pos))
        .collect())
}
