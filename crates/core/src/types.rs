/// All entity primary keys are opaque UUIDs (v4, generated server-side).
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
