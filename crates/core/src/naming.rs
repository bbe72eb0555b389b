//! Key naming normalizer.
//!
//! Request and response payloads use camelCase keys ("wire form"); columns
//! use snake_case ("storage form"). For any key made of lowercase ASCII
//! words joined by single underscores the conversion round-trips:
//!
//! ```
//! use quillboard_core::naming::{to_storage_key, to_wire_key};
//!
//! assert_eq!(to_wire_key("cover_image_id"), "coverImageId");
//! assert_eq!(to_storage_key("coverImageId"), "cover_image_id");
//! assert_eq!(to_storage_key(&to_wire_key("position_x")), "position_x");
//! ```

use serde_json::{Map, Value};

/// Convert a snake_case storage key to its camelCase wire form.
pub fn to_wire_key(storage_key: &str) -> String {
    let mut out = String::with_capacity(storage_key.len());
    let mut upper_next = false;

    for ch in storage_key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Convert a camelCase wire key to its snake_case storage form.
pub fn to_storage_key(wire_key: &str) -> String {
    let mut out = String::with_capacity(wire_key.len() + 4);

    for ch in wire_key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Rename every top-level key of a storage row to wire form.
///
/// Values are moved over untouched (including `null`); nested objects keep
/// their keys as-is.
pub fn project_row_to_wire(row: Map<String, Value>) -> Map<String, Value> {
    row.into_iter()
        .map(|(key, value)| (to_wire_key(&key), value))
        .collect()
}
