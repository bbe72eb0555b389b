//! Resource schema table and field projector.
//!
//! Each [`ResourceKind`] declares its table, how ownership is traced back to
//! a user, which parent column scopes its siblings, and the fixed whitelist
//! of wire fields a client may write. [`project`] applies that whitelist to
//! an arbitrary client payload.

use serde_json::{Map, Value};

use crate::naming::{project_row_to_wire, to_storage_key};

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

/// Every persisted record kind the mutation layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Book,
    Chapter,
    Character,
    Idea,
    Connection,
    Illustration,
    TimelineEvent,
    Image,
    WishlistItem,
}

/// How a record's ownership chain reaches a user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipPath {
    /// The row carries `user_id` itself (books, wishlist items).
    Direct,
    /// The row carries `book_id`; the book carries `user_id`.
    ViaBook,
    /// The row carries `chapter_id`; chapter -> book -> `user_id`.
    ViaChapter,
}

/// How a whitelisted value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// Stored as-is.
    Scalar,
    /// A sequence stored as JSON text and decoded again on read.
    JsonText,
}

/// One writable wire field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub wire: &'static str,
    pub encoding: FieldEncoding,
}

const fn scalar(wire: &'static str) -> FieldSpec {
    FieldSpec {
        wire,
        encoding: FieldEncoding::Scalar,
    }
}

const fn json_text(wire: &'static str) -> FieldSpec {
    FieldSpec {
        wire,
        encoding: FieldEncoding::JsonText,
    }
}

const BOOK_FIELDS: &[FieldSpec] = &[
    scalar("title"),
    scalar("description"),
    scalar("genre"),
    scalar("coverImageId"),
];

const CHAPTER_FIELDS: &[FieldSpec] = &[
    scalar("title"),
    scalar("content"),
    scalar("sortOrder"),
    scalar("wordCount"),
    scalar("status"),
    scalar("notes"),
];

const CHARACTER_FIELDS: &[FieldSpec] = &[
    scalar("name"),
    scalar("role"),
    scalar("description"),
    scalar("appearance"),
    scalar("personality"),
    scalar("backstory"),
    scalar("notes"),
    scalar("imageId"),
    scalar("sortOrder"),
];

const IDEA_FIELDS: &[FieldSpec] = &[
    scalar("title"),
    scalar("description"),
    scalar("imageId"),
    scalar("color"),
    scalar("positionX"),
    scalar("positionY"),
    scalar("width"),
    scalar("height"),
    scalar("zIndex"),
    scalar("linkedChapterId"),
    scalar("type"),
];

// Endpoints are the edge's identity; re-pointing one could cross books.
const CONNECTION_FIELDS: &[FieldSpec] = &[scalar("color"), scalar("label")];

const ILLUSTRATION_FIELDS: &[FieldSpec] =
    &[scalar("caption"), scalar("sortOrder"), scalar("imageId")];

const TIMELINE_EVENT_FIELDS: &[FieldSpec] = &[
    scalar("title"),
    scalar("description"),
    scalar("chapterId"),
    json_text("characterIds"),
    scalar("eventType"),
    scalar("sortOrder"),
    scalar("color"),
];

// Status only moves through the toggle operation.
const WISHLIST_FIELDS: &[FieldSpec] = &[scalar("title"), scalar("description"), scalar("type")];

impl ResourceKind {
    /// Human-readable entity name used in errors and events.
    pub const fn entity_name(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Chapter => "Chapter",
            Self::Character => "Character",
            Self::Idea => "Idea",
            Self::Connection => "Connection",
            Self::Illustration => "Illustration",
            Self::TimelineEvent => "TimelineEvent",
            Self::Image => "Image",
            Self::WishlistItem => "WishlistItem",
        }
    }

    pub const fn table(self) -> &'static str {
        match self {
            Self::Book => "books",
            Self::Chapter => "chapters",
            Self::Character => "characters",
            Self::Idea => "ideas",
            Self::Connection => "connections",
            Self::Illustration => "illustrations",
            Self::TimelineEvent => "timeline_events",
            Self::Image => "images",
            Self::WishlistItem => "wishlist_items",
        }
    }

    pub const fn ownership(self) -> OwnershipPath {
        match self {
            Self::Book | Self::WishlistItem => OwnershipPath::Direct,
            Self::Illustration => OwnershipPath::ViaChapter,
            Self::Chapter
            | Self::Character
            | Self::Idea
            | Self::Connection
            | Self::TimelineEvent
            | Self::Image => OwnershipPath::ViaBook,
        }
    }

    /// Column linking the record to the parent that scopes its siblings.
    pub const fn parent_column(self) -> Option<&'static str> {
        match self.ownership() {
            OwnershipPath::Direct => None,
            OwnershipPath::ViaBook => Some("book_id"),
            OwnershipPath::ViaChapter => Some("chapter_id"),
        }
    }

    /// The kind that owns the parent column, if any.
    pub const fn parent_kind(self) -> Option<ResourceKind> {
        match self.ownership() {
            OwnershipPath::Direct => None,
            OwnershipPath::ViaBook => Some(Self::Book),
            OwnershipPath::ViaChapter => Some(Self::Chapter),
        }
    }

    /// `ORDER BY` clause used when listing siblings.
    pub const fn list_order(self) -> &'static str {
        match self {
            Self::Chapter | Self::Character | Self::Illustration | Self::TimelineEvent => {
                "sort_order ASC, created_at ASC"
            }
            Self::Idea => "z_index ASC, created_at ASC",
            Self::Book | Self::WishlistItem => "created_at DESC",
            Self::Connection | Self::Image => "created_at ASC",
        }
    }

    /// Whether siblings carry an explicit `sort_order` that can be rewritten.
    pub const fn is_reorderable(self) -> bool {
        matches!(
            self,
            Self::Chapter | Self::Character | Self::Illustration | Self::TimelineEvent
        )
    }

    /// The fixed set of wire fields clients may write.
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Book => BOOK_FIELDS,
            Self::Chapter => CHAPTER_FIELDS,
            Self::Character => CHARACTER_FIELDS,
            Self::Idea => IDEA_FIELDS,
            Self::Connection => CONNECTION_FIELDS,
            Self::Illustration => ILLUSTRATION_FIELDS,
            Self::TimelineEvent => TIMELINE_EVENT_FIELDS,
            Self::Image => &[],
            Self::WishlistItem => WISHLIST_FIELDS,
        }
    }

    /// Writable wire field that points at a chapter of the record's own book.
    pub const fn chapter_reference(self) -> Option<&'static str> {
        match self {
            Self::Idea => Some("linkedChapterId"),
            Self::TimelineEvent => Some("chapterId"),
            _ => None,
        }
    }

    fn field(self, wire: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.wire == wire)
    }

    /// Decode JSON-text columns of a storage-form row back into values.
    ///
    /// Text that fails to parse is left as the original string.
    pub fn decode_stored_row(self, row: &mut Map<String, Value>) {
        for field in self
            .fields()
            .iter()
            .filter(|f| f.encoding == FieldEncoding::JsonText)
        {
            let column = to_storage_key(field.wire);
            if let Some(Value::String(text)) = row.get(&column) {
                if let Ok(decoded) = serde_json::from_str::<Value>(text) {
                    row.insert(column, decoded);
                }
            }
        }
    }

    /// Turn a storage-form row into its wire-form response shape.
    pub fn shape_for_wire(self, mut row: Map<String, Value>) -> Map<String, Value> {
        self.decode_stored_row(&mut row);
        project_row_to_wire(row)
    }
}

// ---------------------------------------------------------------------------
// Field projector
// ---------------------------------------------------------------------------

/// A single `column = value` write.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

/// The sanitized subset of a client payload that may be written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub assignments: Vec<Assignment>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.column.as_str())
    }

    /// Storage-form object keyed by column, suitable for
    /// `jsonb_populate_record`.
    pub fn to_storage_object(&self) -> Value {
        Value::Object(
            self.assignments
                .iter()
                .map(|a| (a.column.clone(), a.value.clone()))
                .collect(),
        )
    }
}

/// Keep only whitelisted wire fields of `payload`, converted to columns.
///
/// Unknown fields are dropped silently. Sequence values are serialized to
/// JSON text; every other value (including `null`) passes through. Values
/// are not type-checked here.
pub fn project(kind: ResourceKind, payload: &Map<String, Value>) -> Projection {
    let assignments = payload
        .iter()
        .filter_map(|(key, value)| {
            let field = kind.field(key)?;
            let value = match value {
                Value::Array(_) => Value::String(value.to_string()),
                other => other.clone(),
            };
            Some(Assignment {
                column: to_storage_key(field.wire),
                value,
            })
        })
        .collect();

    Projection { assignments }
}
