/// Store-assigned identifiers are random UUIDs, opaque to clients.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
