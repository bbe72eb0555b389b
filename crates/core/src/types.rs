/// Every record id is a service-generated UUID (v7, time-ordered).
pub type DbId = uuid::Uuid;

/// Opaque user identifier issued by the identity provider.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record id.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
